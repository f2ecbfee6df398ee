//! Tests for projecting openings onto the window.

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::{apply_opening, build_window, parse_timestamp, Event, Window};

fn ts(s: &str) -> NaiveDateTime {
    parse_timestamp(s).unwrap()
}

fn window_from(y: i32, m: u32, d: u32) -> Window {
    build_window(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn slot_counts(window: &Window) -> Vec<usize> {
    window.buckets().iter().map(|b| b.slots.len()).collect()
}

#[test]
fn one_off_opening_fills_only_its_date() {
    let window = window_from(2020, 4, 13);
    let opening = Event::opening(ts("2020-04-17 09:30"), ts("2020-04-17 12:30"));

    let result = apply_opening(&window, &opening);

    assert_eq!(slot_counts(&result), vec![0, 0, 0, 0, 6, 0, 0]);
    assert_eq!(
        result.buckets()[4].slots,
        vec!["9:30", "10:00", "10:30", "11:00", "11:30", "12:00"]
    );
}

#[test]
fn input_window_is_left_untouched() {
    let window = window_from(2020, 4, 13);
    let opening = Event::opening(ts("2020-04-17 09:30"), ts("2020-04-17 12:30"));

    let _ = apply_opening(&window, &opening);

    assert_eq!(window, window_from(2020, 4, 13));
}

#[test]
fn one_off_opening_outside_window_is_noop() {
    let window = window_from(2020, 4, 13);
    let opening = Event::opening(ts("2020-04-24 09:30"), ts("2020-04-24 12:30"));

    assert_eq!(apply_opening(&window, &opening), window);
}

#[test]
fn weekly_opening_projects_onto_matching_weekday_only() {
    // 2020-04-02 is a Thursday; bucket 3 (2020-04-16) is the only Thursday.
    let window = window_from(2020, 4, 13);
    let opening = Event::weekly_opening(ts("2020-04-02 10:30"), ts("2020-04-02 12:30"));

    let result = apply_opening(&window, &opening);

    assert_eq!(slot_counts(&result), vec![0, 0, 0, 4, 0, 0, 0]);
    assert_eq!(
        result.buckets()[3].slots,
        vec!["10:30", "11:00", "11:30", "12:00"]
    );
}

#[test]
fn non_recurring_opening_does_not_match_same_weekday() {
    let window = window_from(2020, 4, 13);
    let opening = Event::opening(ts("2020-04-02 10:30"), ts("2020-04-02 12:30"));

    assert_eq!(apply_opening(&window, &opening), window);
}

#[test]
fn cross_midnight_opening_contributes_nothing() {
    let window = window_from(2020, 4, 13);
    let opening = Event::weekly_opening(ts("2020-04-16 22:00"), ts("2020-04-17 02:00"));

    assert_eq!(apply_opening(&window, &opening), window);
}

#[test]
fn later_opening_replaces_earlier_on_same_day() {
    let window = window_from(2020, 4, 13);
    let morning = Event::opening(ts("2020-04-17 09:00"), ts("2020-04-17 10:00"));
    let afternoon = Event::opening(ts("2020-04-17 14:00"), ts("2020-04-17 15:00"));

    let result = apply_opening(&apply_opening(&window, &morning), &afternoon);

    assert_eq!(result.buckets()[4].slots, vec!["14:00", "14:30"]);
}

#[test]
fn applying_same_opening_twice_is_idempotent() {
    let window = window_from(2020, 4, 13);
    let opening = Event::weekly_opening(ts("2020-04-02 10:30"), ts("2020-04-02 12:30"));

    let once = apply_opening(&window, &opening);
    let twice = apply_opening(&once, &opening);

    assert_eq!(once, twice);
}

#[test]
fn opening_timestamps_survive_projection() {
    let window = window_from(2020, 4, 13);
    let opening = Event::opening(ts("2020-04-17 09:30"), ts("2020-04-17 12:30"));

    let _ = apply_opening(&window, &opening);

    assert_eq!(opening.starts_at, ts("2020-04-17 09:30"));
    assert_eq!(opening.ends_at, ts("2020-04-17 12:30"));
}
