// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;

use crate::event::EventId;

/// Callbacks emitted by the calendar surface.
///
/// The surface owns rendering and gesture recognition; the planner only sees
/// these values, carrying native datetimes at the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// An empty range was selected: the user intends to create an event.
    SlotSelected {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// An existing event was picked: the user intends to edit or delete it.
    EventSelected(EventId),

    /// An event was dragged to a new range.
    EventDropped {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// An event edge was dragged, changing its span.
    EventResized {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}
