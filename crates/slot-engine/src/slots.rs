//! Split a same-day interval into fixed-size slot labels.
//!
//! A slot is labeled by the time of day it starts at (`"9:30"`, `"13:00"`). The
//! interval is half-open: the slot starting exactly at `end` is never emitted.

use chrono::{Duration, NaiveDateTime};

/// Slot granularity in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Generate the ordered slot labels covering `[start, end)`.
///
/// Returns an empty list when `start` and `end` are on different calendar days,
/// or when `end` is not after `start`. The timestamps are taken by value, so the
/// caller's copies are never advanced.
pub fn generate_slots(start: NaiveDateTime, end: NaiveDateTime) -> Vec<String> {
    if start.date() != end.date() {
        return Vec::new();
    }

    let step = Duration::minutes(SLOT_MINUTES);
    let mut slots = Vec::new();
    let mut cursor = start;
    while cursor < end {
        slots.push(slot_label(cursor));
        cursor += step;
    }
    slots
}

/// Format a time of day as a slot label: 24-hour clock, unpadded hour.
pub(crate) fn slot_label(at: NaiveDateTime) -> String {
    at.format("%-H:%M").to_string()
}
