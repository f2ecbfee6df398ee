//! Subtract an appointment's booked slots from its day.

use crate::event::Event;
use crate::slots::generate_slots;
use crate::window::Window;

/// Return a copy of `window` with `appointment`'s slots removed from its day.
///
/// Only the bucket whose date equals the appointment's start date is touched;
/// the remaining slots keep their relative order. Appointments never recur, so
/// `weekly_recurring` is ignored. An appointment outside the window, or one that
/// spans more than one day, changes nothing.
pub fn apply_appointment(window: &Window, appointment: &Event) -> Window {
    let day = appointment.date();
    let busy = generate_slots(appointment.starts_at, appointment.ends_at);

    window.map_buckets(|bucket| {
        if bucket.date != day {
            return bucket.slots.clone();
        }
        bucket
            .slots
            .iter()
            .filter(|slot| !busy.contains(slot))
            .cloned()
            .collect()
    })
}
