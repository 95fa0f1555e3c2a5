// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::event::{Event, EventDraft, EventId};

/// Transient state of the create/edit modal form.
///
/// Lives only while the modal is open; every close resets it to the default.
/// Sync with the event list is explicit and one-directional: gestures
/// populate the fields, submit reads them back out.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormState {
    pub title: String,

    /// Start date field, `YYYY-MM-DD`.
    pub start_date: String,

    /// End date field, `YYYY-MM-DD`.
    pub end_date: String,

    /// The event picked by an event-select gesture, if any. `Some` switches
    /// submit from create to update and makes delete reachable.
    pub selected: Option<Selected>,

    /// Whether the modal is open.
    pub open: bool,

    /// Whether the delete affordance is shown.
    pub delete_visible: bool,
}

/// Snapshot of the selected event. Only the id and title are needed later:
/// the id as the update/delete target, the title for the confirmation prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Selected {
    pub id: EventId,
    pub title: String,
}

impl FormState {
    /// Enters the create flow: dates from the selected slot, title empty,
    /// delete hidden.
    pub fn populate_from_slot(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        self.title.clear();
        self.start_date = format_form_date(start);
        self.end_date = format_form_date(end);
        self.selected = None;
        self.open = true;
        self.delete_visible = false;
    }

    /// Enters the edit flow: all fields from the event, delete visible.
    pub fn populate_from_event(&mut self, event: &Event) {
        self.title = event.title.clone();
        self.start_date = format_form_date(event.start);
        self.end_date = format_form_date(event.end);
        self.selected = Some(Selected {
            id: event.id,
            title: event.title.clone(),
        });
        self.open = true;
        self.delete_visible = true;
    }

    /// Resets to the closed, empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validates the create flow: all three fields must be non-empty and the
    /// dates must parse. `None` blocks the mutation.
    pub fn build_draft(&self) -> Option<EventDraft> {
        if self.title.is_empty() || self.start_date.is_empty() || self.end_date.is_empty() {
            return None;
        }
        let (start, end) = self.parse_dates()?;
        Some(EventDraft {
            title: self.title.clone(),
            start,
            end,
        })
    }

    /// Reads the fields for the update flow. Only structural validation: the
    /// dates must parse; the title is taken as-is.
    pub fn build_update(&self) -> Option<(String, NaiveDateTime, NaiveDateTime)> {
        let (start, end) = self.parse_dates()?;
        Some((self.title.clone(), start, end))
    }

    fn parse_dates(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((
            parse_form_date(&self.start_date)?,
            parse_form_date(&self.end_date)?,
        ))
    }
}

/// Formats a slot or event boundary as the form's `YYYY-MM-DD` string, month
/// and day zero-padded to two digits.
pub fn format_form_date(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Parses a `YYYY-MM-DD` form field into a midnight datetime.
pub fn parse_form_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}
