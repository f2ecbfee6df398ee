//! # slot-engine
//!
//! Rolling 7-day booking availability computed from opening and appointment events.
//!
//! Openings declare when a provider is available (optionally every week on the same
//! weekday); appointments consume part of that availability. The engine projects
//! openings onto a 7-day window as 30-minute slot labels and subtracts the labels
//! occupied by appointments.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{compute_from_events, parse_events};
//!
//! let events = parse_events(
//!     r#"[{"kind":"opening","starts_at":"2020-04-17 09:30","ends_at":"2020-04-17 12:30"},
//!         {"kind":"appointment","starts_at":"2020-04-17 09:30","ends_at":"2020-04-17 12:00"}]"#,
//! )
//! .unwrap();
//!
//! let anchor = NaiveDate::from_ymd_opt(2020, 4, 13).unwrap();
//! let days = compute_from_events(&events, anchor);
//! assert_eq!(days.len(), 7);
//! assert_eq!(days[4].slots, vec!["12:00"]);
//! ```
//!
//! ## Modules
//!
//! - [`slots`] — time interval → ordered 30-minute slot labels
//! - [`window`] — anchor date → 7-day skeleton of empty day buckets
//! - [`opening`] — project an opening (one-off or weekly) onto the window
//! - [`appointment`] — subtract an appointment's slots from its day
//! - [`availability`] — fetch events and fold them into the final window
//! - [`event`] — event records and timestamp parsing
//! - [`store`] — event store abstraction (in-memory, JSON file)
//! - [`error`] — Error types

pub mod appointment;
pub mod availability;
pub mod error;
pub mod event;
pub mod opening;
pub mod slots;
pub mod store;
pub mod window;

pub use appointment::apply_appointment;
pub use availability::{compute_availabilities, compute_from_events};
pub use error::AvailabilityError;
pub use event::{parse_date, parse_timestamp, timestamp_from_millis, Event, EventKind};
pub use opening::apply_opening;
pub use slots::{generate_slots, SLOT_MINUTES};
pub use store::{parse_events, EventStore, JsonFileStore};
pub use window::{build_window, DayBucket, Window, WINDOW_DAYS};
