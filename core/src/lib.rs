// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

mod error;
mod event;
mod form;
mod gesture;
mod planner;
mod session;
mod store;

pub use crate::error::Error;
pub use crate::event::{Event, EventDraft, EventId, seed_events};
pub use crate::form::{FormState, Selected, format_form_date, parse_form_date};
pub use crate::gesture::Gesture;
pub use crate::planner::{Confirm, Deletion, Notify, Planner, Submit};
pub use crate::session::{JsonFileMirror, MemoryMirror, SessionMirror};
pub use crate::store::EventStore;

/// Application name, used for platform directories and user-facing output.
pub const APP_NAME: &str = "calboard";
