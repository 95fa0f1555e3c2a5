// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::event::EventId;

/// Event store and session mirror errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// No event with the given id exists in the store.
    NotFound(EventId),

    /// No free id was found within the bounded id range.
    IdSpaceExhausted,

    /// Delete was requested while no event is selected.
    NothingSelected,

    /// The session mirror failed to read, write or serialize.
    Mirror(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Event not found: {id}"),
            Self::IdSpaceExhausted => {
                write!(f, "Failed to generate a unique event id after multiple attempts")
            }
            Self::NothingSelected => write!(f, "No event selected"),
            Self::Mirror(e) => write!(f, "Session mirror error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Mirror(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Mirror(format!("IO error: {e}"))
    }
}
