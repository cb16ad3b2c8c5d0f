mod common;

use chrono::Duration;
use common::{date, time, utc};
use golf_league_be::{
    errors::AppError,
    league::window::{compute_window, local_to_utc, parse_timezone, parse_wall_clock},
};

#[test]
fn test_summer_window_uses_daylight_offset() {
    let window = compute_window(
        date(2025, 5, 15),
        7,
        "21:00",
        1,
        "18:00",
        "America/New_York",
    )
    .unwrap();

    // 2025-05-08 21:00 EDT
    assert_eq!(window.opens_at, utc("2025-05-09T01:00:00Z"));
    // 2025-05-14 18:00 EDT
    assert_eq!(window.closes_at, utc("2025-05-14T22:00:00Z"));

    let wall_clock = date(2025, 5, 8).and_time(time(21, 0));
    assert_eq!(window.opens_at.naive_utc() - wall_clock, Duration::hours(4));
}

#[test]
fn test_winter_window_uses_standard_offset() {
    let window = compute_window(
        date(2025, 1, 15),
        7,
        "21:00",
        1,
        "18:00",
        "America/New_York",
    )
    .unwrap();

    assert_eq!(window.opens_at, utc("2025-01-09T02:00:00Z"));
    assert_eq!(window.closes_at, utc("2025-01-14T23:00:00Z"));

    let wall_clock = date(2025, 1, 8).and_time(time(21, 0));
    assert_eq!(window.opens_at.naive_utc() - wall_clock, Duration::hours(5));
}

#[test]
fn test_window_spanning_spring_forward_uses_each_dates_offset() {
    // Opens in EST, closes in EDT.
    let window = compute_window(
        date(2025, 3, 12),
        7,
        "21:00",
        1,
        "18:00",
        "America/New_York",
    )
    .unwrap();

    assert_eq!(window.opens_at, utc("2025-03-06T02:00:00Z"));
    assert_eq!(window.closes_at, utc("2025-03-11T22:00:00Z"));
}

#[test]
fn test_seconds_are_optional() {
    let short = compute_window(date(2025, 7, 4), 3, "08:00", 0, "12:30", "Europe/London").unwrap();
    let long = compute_window(
        date(2025, 7, 4),
        3,
        "08:00:00",
        0,
        "12:30:00",
        "Europe/London",
    )
    .unwrap();

    assert_eq!(short, long);
    assert_eq!(short.opens_at, utc("2025-07-01T07:00:00Z"));
    assert_eq!(short.closes_at, utc("2025-07-04T11:30:00Z"));
}

#[test]
fn test_nonexistent_local_time_moves_past_the_gap() {
    let tz = parse_timezone("America/New_York").unwrap();

    // 02:30 does not exist on 2025-03-09; clocks jump to 03:00 EDT.
    let instant = local_to_utc(date(2025, 3, 9), time(2, 30), tz).unwrap();
    assert_eq!(instant, utc("2025-03-09T07:00:00Z"));
}

#[test]
fn test_ambiguous_local_time_takes_earlier_instant() {
    let tz = parse_timezone("America/New_York").unwrap();

    // 01:30 happens twice on 2025-11-02; the first is still EDT.
    let instant = local_to_utc(date(2025, 11, 2), time(1, 30), tz).unwrap();
    assert_eq!(instant, utc("2025-11-02T05:30:00Z"));
}

#[test]
fn test_utc_zone_is_identity() {
    let window = compute_window(date(2025, 6, 1), 2, "00:00", 0, "23:59", "UTC").unwrap();

    assert_eq!(window.opens_at, utc("2025-05-30T00:00:00Z"));
    assert_eq!(window.closes_at, utc("2025-06-01T23:59:00Z"));
}

#[test]
fn test_opens_must_be_strictly_before_closes() {
    let same_day = compute_window(date(2025, 6, 1), 2, "08:00", 2, "20:00", "UTC");
    assert!(matches!(same_day, Err(AppError::Validation(_))));

    let reversed = compute_window(date(2025, 6, 1), 1, "08:00", 3, "20:00", "UTC");
    assert!(matches!(reversed, Err(AppError::Validation(_))));
}

#[test]
fn test_negative_offsets_are_rejected() {
    let result = compute_window(date(2025, 6, 1), 2, "08:00", -1, "20:00", "UTC");
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_unknown_timezone_is_rejected() {
    let result = compute_window(date(2025, 6, 1), 7, "21:00", 1, "18:00", "Mars/Olympus_Mons");
    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("Mars/Olympus_Mons"));
}

#[test]
fn test_wall_clock_parsing() {
    assert_eq!(parse_wall_clock("15:40").unwrap(), time(15, 40));
    assert_eq!(parse_wall_clock("15:40:00").unwrap(), time(15, 40));
    assert_eq!(parse_wall_clock(" 07:05 ").unwrap(), time(7, 5));

    assert!(parse_wall_clock("25:00").is_err());
    assert!(parse_wall_clock("3pm").is_err());
    assert!(parse_wall_clock("").is_err());
}
