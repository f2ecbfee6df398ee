//! Project an opening onto the days of a window.
//!
//! A one-off opening applies to the bucket with the same calendar date. A weekly
//! opening applies to every bucket sharing its weekday, whether that bucket lies
//! before or after the opening's own date.
//!
//! Matching buckets have their slots replaced, not merged: when several openings
//! hit the same day, the last one applied wins.

use crate::event::Event;
use crate::slots::generate_slots;
use crate::window::{DayBucket, Window};

/// Return a copy of `window` with `opening`'s slots projected onto matching days.
///
/// An opening that ends on a different day than it starts leaves the window
/// unchanged.
pub fn apply_opening(window: &Window, opening: &Event) -> Window {
    if !opening.is_single_day() {
        return window.clone();
    }

    let slots = generate_slots(opening.starts_at, opening.ends_at);
    window.map_buckets(|bucket| {
        if matches(bucket, opening) {
            slots.clone()
        } else {
            bucket.slots.clone()
        }
    })
}

fn matches(bucket: &DayBucket, opening: &Event) -> bool {
    if opening.weekly_recurring {
        bucket.weekday_index() == opening.weekday_index()
    } else {
        bucket.date == opening.date()
    }
}
