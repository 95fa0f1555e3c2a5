// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use crate::tui::component_form::{Access, Form, Input};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::form_session::FormSessionLike;

pub fn new_editor<S: FormSessionLike + 'static>(
    title: &str,
    with_delete: bool,
) -> SinglePage<S, Form<S>> {
    SinglePage::new(title.to_owned(), with_delete, new_event_form())
}

fn new_event_form<S: FormSessionLike + 'static>() -> Form<S> {
    Form::new(vec![
        Box::new(new_title()),
        Box::new(new_start_date()),
        Box::new(new_end_date()),
    ])
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident) => {
        fn $fn<S: FormSessionLike>() -> Input<S, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl<S: FormSessionLike> Access<S> for $acc {
            fn get(session: &RefCell<S>) -> String {
                session.borrow().form().data.$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) {
                dispatcher.dispatch(Action::$action(value));
            }
        }
    };
}

new_input!(new_title, "Title", TitleAccess, title, UpdateTitle);
new_input!(
    new_start_date,
    "Start date",
    StartDateAccess,
    start_date,
    UpdateStartDate
);
new_input!(
    new_end_date,
    "End date",
    EndDateAccess,
    end_date,
    UpdateEndDate
);
