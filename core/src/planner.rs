// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::event::Event;
use crate::form::FormState;
use crate::gesture::Gesture;
use crate::store::EventStore;

/// Confirmation port: a blocking yes/no question to the user.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Notification port: a blocking user-facing message.
pub trait Notify {
    fn notify(&self, message: &str);
}

/// Outcome of submitting the modal form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submit {
    Created(Event),
    Updated(Event),

    /// Validation blocked the mutation; the form stays open and unchanged.
    Rejected,
}

/// Outcome of the delete action.
#[derive(Debug, Clone, PartialEq)]
pub enum Deletion {
    Deleted(Event),

    /// The user declined the confirmation; nothing changed and the form
    /// stays open with the selection intact.
    Declined,
}

const MSG_FIELDS_REQUIRED: &str = "All fields are required !";
const MSG_INVALID_DATES: &str = "Start and end must be valid dates (YYYY-MM-DD)";

/// Calendar board controller.
///
/// Routes gestures into the store or the form, and drives the modal's
/// submit/delete/close transitions. The modal itself is purely
/// presentational; it renders [`FormState`] and calls back in here.
pub struct Planner {
    store: EventStore,
    form: FormState,
    confirm: Box<dyn Confirm>,
    notify: Box<dyn Notify>,
}

impl Planner {
    pub fn new(store: EventStore, confirm: Box<dyn Confirm>, notify: Box<dyn Notify>) -> Self {
        Self {
            store,
            form: FormState::default(),
            confirm,
            notify,
        }
    }

    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access for the modal widget editing the fields.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Opens an empty create form, the header-button path: no slot, all
    /// fields blank, delete hidden.
    pub fn open_create(&mut self) {
        self.form.clear();
        self.form.open = true;
    }

    /// Routes one calendar gesture.
    ///
    /// Slot and event selection only touch the form; drag and resize mutate
    /// the store directly, with no modal and no confirmation.
    pub fn handle(&mut self, gesture: Gesture) -> Result<(), Error> {
        tracing::debug!(?gesture, "handling gesture");
        match gesture {
            Gesture::SlotSelected { start, end } => {
                self.form.populate_from_slot(start, end);
                Ok(())
            }
            Gesture::EventSelected(id) => {
                let event = self.store.get(id).ok_or(Error::NotFound(id))?;
                self.form.populate_from_event(event);
                Ok(())
            }
            Gesture::EventDropped { id, start, end } | Gesture::EventResized { id, start, end } => {
                self.store.move_or_resize(id, start, end).map(|_| ())
            }
        }
    }

    /// Submits the form: update when an event is selected, create otherwise.
    ///
    /// A rejected submission notifies the user, keeps the form open and
    /// leaves the list untouched. A successful one closes the form.
    pub fn submit(&mut self) -> Result<Submit, Error> {
        if let Some(selected) = &self.form.selected {
            let Some((title, start, end)) = self.form.build_update() else {
                self.notify.notify(MSG_INVALID_DATES);
                return Ok(Submit::Rejected);
            };
            let event = self.store.update(selected.id, title, start, end)?;
            self.form.clear();
            Ok(Submit::Updated(event))
        } else {
            let Some(draft) = self.form.build_draft() else {
                self.notify.notify(MSG_FIELDS_REQUIRED);
                return Ok(Submit::Rejected);
            };
            let event = self.store.create(draft)?;
            self.form.clear();
            Ok(Submit::Created(event))
        }
    }

    /// Deletes the selected event after a confirmation prompt naming it.
    ///
    /// Only reachable with a selection; a declined prompt is a no-op.
    pub fn delete(&mut self) -> Result<Deletion, Error> {
        let Some(selected) = &self.form.selected else {
            return Err(Error::NothingSelected);
        };
        let message = format!("Are you sure you want to delete '{}'", selected.title);
        if !self.confirm.confirm(&message) {
            tracing::debug!(id = %selected.id, "deletion declined");
            return Ok(Deletion::Declined);
        }
        let event = self.store.remove(selected.id)?;
        self.form.clear();
        Ok(Deletion::Deleted(event))
    }

    /// Closes the modal, clearing every field and hiding delete.
    pub fn close(&mut self) {
        self.form.clear();
    }

    /// Tears the session down; the next run starts from the seed set.
    pub fn close_session(self) -> Result<(), Error> {
        self.store.close()
    }
}
