//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The event store could not be read.
    #[error("Event store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The event store payload is not a valid list of event records.
    #[error("Event JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
