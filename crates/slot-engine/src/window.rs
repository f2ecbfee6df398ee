//! The 7-day window skeleton that openings and appointments are folded into.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of consecutive days in a window.
pub const WINDOW_DAYS: usize = 7;

/// One calendar day's computed availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    /// The day this bucket covers.
    pub date: NaiveDate,
    /// Free slot labels, in chronological order.
    pub slots: Vec<String>,
}

impl DayBucket {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            slots: Vec::new(),
        }
    }

    /// Weekday index of the bucket's date, Monday = 0.
    pub fn weekday_index(&self) -> u32 {
        self.date.weekday().num_days_from_monday()
    }
}

/// An ordered run of [`WINDOW_DAYS`] day buckets starting at an anchor date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Window {
    buckets: Vec<DayBucket>,
}

impl Window {
    pub fn buckets(&self) -> &[DayBucket] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<DayBucket> {
        self.buckets
    }

    /// Build a new window by rewriting every bucket through `f`.
    ///
    /// The bucket count and dates are preserved; only slots may change.
    pub(crate) fn map_buckets<F>(&self, mut f: F) -> Window
    where
        F: FnMut(&DayBucket) -> Vec<String>,
    {
        let buckets = self
            .buckets
            .iter()
            .map(|bucket| DayBucket {
                date: bucket.date,
                slots: f(bucket),
            })
            .collect();
        Window { buckets }
    }
}

/// Build the empty window for `anchor, anchor + 1, …, anchor + 6`.
///
/// Days that would overflow the calendar range supported by `chrono` are omitted,
/// which can only happen for anchors within a week of `NaiveDate::MAX`.
pub fn build_window(anchor: NaiveDate) -> Window {
    let buckets = (0..WINDOW_DAYS as u64)
        .map_while(|offset| anchor.checked_add_days(Days::new(offset)))
        .map(DayBucket::empty)
        .collect();
    Window { buckets }
}
