// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::event::Event;

/// Session-scoped persistence for the event list.
///
/// The mirror holds a single entry: the JSON-serialized list. `load`
/// returning `Ok(None)` means "no prior session"; malformed content is
/// reported the same way so the caller falls back to the seed set instead of
/// propagating a crash.
pub trait SessionMirror {
    /// Reads the persisted list, if any.
    fn load(&self) -> Result<Option<Vec<Event>>, Error>;

    /// Replaces the persisted list with the given one.
    fn save(&mut self, events: &[Event]) -> Result<(), Error>;

    /// Removes the persisted list entirely.
    fn clear(&mut self) -> Result<(), Error>;
}

/// In-memory mirror, for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryMirror {
    entry: Option<String>,
}

impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw serialized entry, as the next `load` would see it.
    pub fn raw(&self) -> Option<&str> {
        self.entry.as_deref()
    }
}

impl SessionMirror for MemoryMirror {
    fn load(&self) -> Result<Option<Vec<Event>>, Error> {
        Ok(self.entry.as_deref().and_then(decode))
    }

    fn save(&mut self, events: &[Event]) -> Result<(), Error> {
        self.entry = Some(encode(events)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.entry = None;
        Ok(())
    }
}

/// File-backed mirror: one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileMirror {
    path: PathBuf,
}

impl JsonFileMirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionMirror for JsonFileMirror {
    fn load(&self) -> Result<Option<Vec<Event>>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(decode(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Mirror(format!(
                "failed to read session file {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&mut self, events: &[Event]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, encode(events)?)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn encode(events: &[Event]) -> Result<String, Error> {
    Ok(serde_json::to_string(events)?)
}

fn decode(content: &str) -> Option<Vec<Event>> {
    match serde_json::from_str(content) {
        Ok(events) => Some(events),
        Err(e) => {
            tracing::warn!(%e, "discarding malformed session data");
            None
        }
    }
}
