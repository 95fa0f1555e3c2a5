// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;
use rand::Rng;

use crate::error::Error;
use crate::event::{Event, EventDraft, EventId, seed_events};
use crate::session::SessionMirror;

/// Exclusive upper bound of the generated id range.
const ID_RANGE: u32 = 100_000;

/// Attempts before giving up on finding a free random id.
const ID_ATTEMPTS: usize = 16;

/// The authoritative ordered list of events.
///
/// Every successful mutation writes the full list back into the session
/// mirror, so mirror content and in-memory list never drift apart.
pub struct EventStore {
    events: Vec<Event>,
    mirror: Box<dyn SessionMirror>,
}

impl EventStore {
    /// Opens the store over the given mirror. A prior session replaces the
    /// seed set; absent or unreadable data keeps it. Nothing is written back
    /// until the first mutation.
    pub fn hydrate(mirror: Box<dyn SessionMirror>) -> Self {
        let events = match mirror.load() {
            Ok(Some(events)) => {
                tracing::debug!(count = events.len(), "hydrated events from session mirror");
                events
            }
            Ok(None) => {
                tracing::debug!("no prior session, using seed events");
                seed_events()
            }
            Err(e) => {
                tracing::warn!(%e, "session mirror unreadable, using seed events");
                seed_events()
            }
        };
        Self { events, mirror }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Appends a new event built from the draft, under a freshly generated id.
    pub fn create(&mut self, draft: EventDraft) -> Result<Event, Error> {
        let id = self.generate_id()?;
        let event = Event {
            id,
            title: draft.title,
            start: draft.start,
            end: draft.end,
        };
        self.events.push(event.clone());
        self.persist()?;
        tracing::debug!(%id, title = %event.title, "created event");
        Ok(event)
    }

    /// Replaces title, start and end of an existing event in place; its
    /// position in the list does not change.
    pub fn update(
        &mut self,
        id: EventId,
        title: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Event, Error> {
        let event = {
            let event = self
                .events
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or(Error::NotFound(id))?;
            event.title = title;
            event.start = start;
            event.end = end;
            event.clone()
        };
        self.persist()?;
        tracing::debug!(%id, "updated event");
        Ok(event)
    }

    /// Applies a drag or resize gesture: start and end only, title and id
    /// preserved. No overlap or bounds checking against other events.
    pub fn move_or_resize(
        &mut self,
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Event, Error> {
        let event = {
            let event = self
                .events
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or(Error::NotFound(id))?;
            event.start = start;
            event.end = end;
            event.clone()
        };
        self.persist()?;
        tracing::debug!(%id, %start, %end, "moved or resized event");
        Ok(event)
    }

    /// Removes the event with the given id.
    pub fn remove(&mut self, id: EventId) -> Result<Event, Error> {
        let pos = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::NotFound(id))?;
        let event = self.events.remove(pos);
        self.persist()?;
        tracing::debug!(%id, "removed event");
        Ok(event)
    }

    /// Tears the session down: the mirrored list is removed, so the next
    /// hydrate starts from the seed set again.
    pub fn close(mut self) -> Result<(), Error> {
        tracing::debug!("clearing session mirror");
        self.mirror.clear()
    }

    fn persist(&mut self) -> Result<(), Error> {
        self.mirror.save(&self.events)
    }

    fn generate_id(&self) -> Result<EventId, Error> {
        let mut rng = rand::rng();
        for _ in 0..ID_ATTEMPTS {
            let id = EventId(rng.random_range(0..ID_RANGE));
            if self.get(id).is_none() {
                return Ok(id);
            }
        }
        Err(Error::IdSpaceExhausted)
    }
}
