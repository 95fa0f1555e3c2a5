// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use calboard_core::Planner;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::tui::component::{Component, Message};
use crate::tui::component_form::Form;
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::Dispatcher;
use crate::tui::editor;
use crate::tui::form_session::{FormAction, FormSession};

/// Runs the modal form over the planner's current form state.
///
/// Blocks until the user resolves it: `Submit`, `Delete`, or `None` for
/// cancel (Esc). The edited field values are copied back into the planner
/// either way; acting on the outcome is the caller's job.
pub fn edit_form(planner: &mut Planner) -> Result<Option<FormAction>, Box<dyn Error>> {
    let title = match planner.form().selected {
        Some(_) => "Edit Event",
        None => "Add Event",
    };
    let session = FormSession::from_form(planner.form());
    let delete_visible = session.delete_visible;
    let session = Rc::new(RefCell::new(session));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        FormSession::register_to(session.clone(), &mut dispatcher);
        let mut view = EditorView::new(dispatcher, title, delete_visible, &session);

        loop {
            if let Err(e) = view.draw(&session, &mut terminal) {
                break Err(e);
            }

            match view.read_event(&session) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) if session.borrow().action.is_some() => break Ok(()),
                Ok(_) => {} // keep rendering frames
            }
        }
    }; // release the view before restoring the terminal
    ratatui::restore();
    result?;

    let session = Rc::try_unwrap(session)
        .map_err(|_| "Form session still has references")?
        .into_inner();

    let form = planner.form_mut();
    form.title = session.data.title;
    form.start_date = session.data.start_date;
    form.end_date = session.data.end_date;
    Ok(session.action)
}

struct EditorView {
    dispatcher: Dispatcher,
    page: SinglePage<FormSession, Form<FormSession>>,

    /// The area rendered last frame, which key handling positions against.
    area: Rect,
}

impl EditorView {
    fn new(
        mut dispatcher: Dispatcher,
        title: &str,
        delete_visible: bool,
        session: &Rc<RefCell<FormSession>>,
    ) -> Self {
        let mut page = editor::new_editor(title, delete_visible);
        page.activate(&mut dispatcher, session);
        Self {
            dispatcher,
            page,
            area: Rect::default(),
        }
    }

    fn draw(
        &mut self,
        session: &RefCell<FormSession>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        terminal.draw(|frame| {
            self.area = frame.area();
            self.page.render(session, self.area, frame.buffer_mut());
            if let Some(pos) = self.page.get_cursor_position(session, self.area) {
                frame.set_cursor_position(pos);
            }
        })?;
        Ok(())
    }

    fn read_event(
        &mut self,
        session: &RefCell<FormSession>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.page.on_key(&mut self.dispatcher, session, self.area, key))
            }
            _ => Ok(None),
        }
    }
}
