// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use calboard_core::FormState;

use crate::tui::dispatcher::{Action, Dispatcher};

/// How the user resolved the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Delete,
}

pub trait FormSessionLike {
    fn form(&self) -> &FormSession;
}

/// Editing session backing the form widgets for one modal run.
#[derive(Debug, Default)]
pub struct FormSession {
    pub data: FormData,

    /// Whether delete is reachable. Only edit mode shows it; a delete
    /// request in create mode is dropped.
    pub delete_visible: bool,

    /// Set once the user resolves the form; `None` while still editing.
    pub action: Option<FormAction>,
}

#[derive(Debug, Default)]
pub struct FormData {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

impl FormSession {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            data: FormData {
                title: form.title.clone(),
                start_date: form.start_date.clone(),
                end_date: form.end_date.clone(),
            },
            delete_visible: form.delete_visible,
            action: None,
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::UpdateTitle(v) => that.data.title = v.clone(),
                Action::UpdateStartDate(v) => that.data.start_date = v.clone(),
                Action::UpdateEndDate(v) => that.data.end_date = v.clone(),
                Action::SubmitChanges => that.action = Some(FormAction::Submit),
                Action::RequestDelete if that.delete_visible => {
                    that.action = Some(FormAction::Delete);
                }
                Action::RequestDelete => {}
            }
        }));
        dispatcher.register(callback);
    }
}

impl FormSessionLike for FormSession {
    fn form(&self) -> &FormSession {
        self
    }
}
