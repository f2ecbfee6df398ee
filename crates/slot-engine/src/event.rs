//! Calendar event records and the timestamp parsing they rely on.
//!
//! Timestamps are wall-clock values with no timezone attached. Both the ISO 8601
//! `T` separator and a plain space are accepted, with or without seconds. Stores
//! that hand back absolute timestamps may use RFC 3339 strings with an offset, whose
//! local time is kept as-is, or epoch milliseconds, read as UTC.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AvailabilityError, Result};

/// Accepted timestamp layouts, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// What an event declares about the provider's time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// The provider is available during this span.
    Opening,
    /// The span is already booked.
    Appointment,
}

/// A single event record as held by the event store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub starts_at: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub ends_at: NaiveDateTime,
    /// Repeat every week on the weekday of `starts_at`. Ignored for appointments.
    #[serde(default)]
    pub weekly_recurring: bool,
}

impl Event {
    pub fn opening(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            kind: EventKind::Opening,
            starts_at,
            ends_at,
            weekly_recurring: false,
        }
    }

    pub fn weekly_opening(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            weekly_recurring: true,
            ..Self::opening(starts_at, ends_at)
        }
    }

    pub fn appointment(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            kind: EventKind::Appointment,
            starts_at,
            ends_at,
            weekly_recurring: false,
        }
    }

    /// Calendar date the event starts on.
    pub fn date(&self) -> NaiveDate {
        self.starts_at.date()
    }

    /// Weekday index of the start date, Monday = 0.
    pub fn weekday_index(&self) -> u32 {
        self.starts_at.weekday().num_days_from_monday()
    }

    /// True when the event starts and ends on the same calendar date.
    pub fn is_single_day(&self) -> bool {
        self.starts_at.date() == self.ends_at.date()
    }
}

/// Parse a wall-clock timestamp such as `2020-04-17 09:30` or `2020-04-17T09:30:00`.
///
/// RFC 3339 values with an offset (`2020-04-17T09:30:00Z`) are accepted too; the
/// offset is dropped and the local time kept.
///
/// # Errors
/// Returns `AvailabilityError::InvalidTimestamp` if no accepted layout matches.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .ok_or_else(|| AvailabilityError::InvalidTimestamp(input.to_string()))
}

/// Parse a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDate` if the input is not a valid date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| AvailabilityError::InvalidDate(input.to_string()))
}

/// Convert epoch milliseconds to a UTC wall-clock timestamp.
///
/// # Errors
/// Returns `AvailabilityError::InvalidTimestamp` if the value is out of range.
pub fn timestamp_from_millis(millis: i64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| AvailabilityError::InvalidTimestamp(millis.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(millis) => timestamp_from_millis(millis),
        RawTimestamp::Text(raw) => parse_timestamp(&raw),
    };
    parsed.map_err(serde::de::Error::custom)
}
