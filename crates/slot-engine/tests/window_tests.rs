//! Tests for the 7-day window skeleton.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use slot_engine::{build_window, WINDOW_DAYS};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn window_has_seven_consecutive_empty_days() {
    let window = build_window(date(2020, 4, 13));
    let buckets = window.buckets();

    assert_eq!(buckets.len(), WINDOW_DAYS);
    assert_eq!(buckets[0].date, date(2020, 4, 13));
    assert_eq!(buckets[6].date, date(2020, 4, 19));
    assert!(buckets.iter().all(|b| b.slots.is_empty()));
}

#[test]
fn window_crosses_month_and_year_boundaries() {
    let window = build_window(date(2020, 12, 29));
    let dates: Vec<NaiveDate> = window.buckets().iter().map(|b| b.date).collect();

    assert_eq!(
        dates,
        vec![
            date(2020, 12, 29),
            date(2020, 12, 30),
            date(2020, 12, 31),
            date(2021, 1, 1),
            date(2021, 1, 2),
            date(2021, 1, 3),
            date(2021, 1, 4),
        ]
    );
}

#[test]
fn window_covers_leap_day() {
    let window = build_window(date(2020, 2, 27));
    assert_eq!(window.buckets()[2].date, date(2020, 2, 29));
    assert_eq!(window.buckets()[3].date, date(2020, 3, 1));
}

#[test]
fn weekday_index_follows_calendar() {
    // 2020-04-13 is a Monday.
    let window = build_window(date(2020, 4, 13));
    assert_eq!(window.buckets()[0].date.weekday(), Weekday::Mon);
    let indices: Vec<u32> = window.buckets().iter().map(|b| b.weekday_index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn anchor_is_first_bucket_date() {
    let window = build_window(date(2014, 8, 10));
    assert_eq!(window.buckets()[0].date, date(2014, 8, 10));
}

#[test]
fn window_is_truncated_at_end_of_calendar_range() {
    // Days past NaiveDate::MAX cannot be represented, so the window stops there.
    let anchor = NaiveDate::MAX.checked_sub_days(Days::new(2)).unwrap();

    let window = build_window(anchor);
    let dates: Vec<NaiveDate> = window.buckets().iter().map(|b| b.date).collect();

    assert_eq!(dates.len(), 3);
    assert_eq!(dates.first(), Some(&anchor));
    assert_eq!(dates.last(), Some(&NaiveDate::MAX));
}

#[test]
fn window_at_calendar_maximum_has_one_day() {
    assert_eq!(build_window(NaiveDate::MAX).buckets().len(), 1);
}
