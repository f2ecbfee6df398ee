//! Event store abstraction.
//!
//! The engine reads the whole event collection once per computation and makes no
//! assumption about its order. Anything that can hand back a `Vec<Event>` can act
//! as a store.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::event::Event;

/// A source of raw event records.
pub trait EventStore {
    /// Fetch every event the store holds, unfiltered.
    fn fetch_events(&self) -> Result<Vec<Event>>;
}

impl EventStore for [Event] {
    fn fetch_events(&self) -> Result<Vec<Event>> {
        Ok(self.to_vec())
    }
}

impl EventStore for Vec<Event> {
    fn fetch_events(&self) -> Result<Vec<Event>> {
        self.as_slice().fetch_events()
    }
}

/// An event store backed by a JSON file holding an array of event records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventStore for JsonFileStore {
    fn fetch_events(&self) -> Result<Vec<Event>> {
        let raw = std::fs::read_to_string(&self.path)?;
        parse_events(&raw)
    }
}

/// Parse a JSON array of event records.
///
/// Blank input is treated as an empty collection.
///
/// # Errors
/// Returns `AvailabilityError::Json` if the payload is not an array of events,
/// including when a timestamp cannot be parsed.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}
