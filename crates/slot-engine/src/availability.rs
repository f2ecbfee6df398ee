//! Fold a store's events into the 7-day availability window.
//!
//! Openings are applied first, in collection order, then appointments, in
//! collection order. Because openings replace a day's slots, applying them all
//! before any appointment keeps a later opening from restoring booked slots.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::appointment::apply_appointment;
use crate::error::Result;
use crate::event::{Event, EventKind};
use crate::opening::apply_opening;
use crate::store::EventStore;
use crate::window::{build_window, DayBucket};

/// Compute the free slots for the 7 days starting at `anchor`.
///
/// Returns an empty list when the store holds no events at all. When events exist
/// but none of them open a day, the result is 7 buckets with empty slots.
///
/// # Errors
/// Any failure reading the store is returned unchanged.
pub fn compute_availabilities<S>(store: &S, anchor: NaiveDate) -> Result<Vec<DayBucket>>
where
    S: EventStore + ?Sized,
{
    let events = store.fetch_events()?;
    debug!(count = events.len(), %anchor, "fetched events");
    Ok(compute_from_events(&events, anchor))
}

/// Same as [`compute_availabilities`] over an in-memory event slice.
pub fn compute_from_events(events: &[Event], anchor: NaiveDate) -> Vec<DayBucket> {
    if events.is_empty() {
        return Vec::new();
    }

    let openings = of_kind(events, EventKind::Opening);
    let appointments = of_kind(events, EventKind::Appointment);
    debug!(
        openings = openings.len(),
        appointments = appointments.len(),
        "folding events into window"
    );

    let opened = openings
        .into_iter()
        .fold(build_window(anchor), |window, opening| {
            trace!(starts_at = %opening.starts_at, weekly = opening.weekly_recurring, "opening");
            apply_opening(&window, opening)
        });

    appointments
        .into_iter()
        .fold(opened, |window, appointment| {
            trace!(starts_at = %appointment.starts_at, "appointment");
            apply_appointment(&window, appointment)
        })
        .into_buckets()
}

fn of_kind(events: &[Event], kind: EventKind) -> Vec<&Event> {
    events.iter().filter(|e| e.kind == kind).collect()
}
