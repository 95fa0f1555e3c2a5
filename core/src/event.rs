// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, num::ParseIntError, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Identifier of an event, unique within one session's event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EventId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for EventId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A single calendar entry.
///
/// `start <= end` is not enforced; the calendar surface renders whatever the
/// store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Draft for an event, used for creating new events.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// The built-in events shown when no prior session exists.
pub fn seed_events() -> Vec<Event> {
    vec![
        seed(1, "Test event 1", (2022, 10, 26), (2022, 10, 29)),
        seed(2, "Test event 2", (2022, 10, 2), (2022, 10, 3)),
        seed(3, "Test event 3", (2022, 11, 5), (2022, 11, 5)),
        seed(4, "Test event 4", (2022, 11, 20), (2022, 11, 21)),
    ]
}

fn seed(id: u32, title: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> Event {
    Event {
        id: EventId(id),
        title: title.to_string(),
        start: midnight(start),
        end: midnight(end),
    }
}

fn midnight((y, m, d): (i32, u32, u32)) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
}
