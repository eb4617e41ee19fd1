use crate::logs::{SinceError, parse_since, parse_since_at};
use chrono::{TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;

#[test]
fn relative_duration_is_subtracted_from_now() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    assert_eq!(parse_since_at("1h", now).unwrap(), now - TimeDelta::hours(1));
    assert_eq!(parse_since_at("30m", now).unwrap(), now - TimeDelta::minutes(30));
    assert_eq!(
        parse_since_at("1h30m", now).unwrap(),
        now - TimeDelta::minutes(90)
    );
    assert_eq!(parse_since_at("2days", now).unwrap(), now - TimeDelta::days(2));
}

#[test]
fn fractional_and_spaced_durations_are_accepted() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    assert_eq!(
        parse_since_at("1.5h", now).unwrap(),
        now - TimeDelta::minutes(90)
    );
    assert_eq!(parse_since_at("1 h", now).unwrap(), now - TimeDelta::hours(1));
    assert_eq!(parse_since_at("0", now).unwrap(), now);
}

#[test]
fn two_hours_is_close_to_wall_clock() {
    let expected = Utc::now() - TimeDelta::hours(2);

    let since = parse_since("2h").unwrap();

    assert!((since - expected).num_seconds().abs() <= 5);
}

#[test]
fn calendar_date_is_midnight_utc() {
    let now = Utc::now();

    assert_eq!(
        parse_since_at("2024-01-01", now).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn full_timestamps_are_accepted() {
    let now = Utc::now();
    let expected = Utc.with_ymd_and_hms(2024, 1, 1, 15, 4, 5).unwrap();

    assert_eq!(parse_since_at("2024-01-01T15:04:05Z", now).unwrap(), expected);
    assert_eq!(
        parse_since_at("2024-01-01T17:04:05+02:00", now).unwrap(),
        expected
    );
    assert_eq!(parse_since_at("2024-01-01T15:04:05", now).unwrap(), expected);
}

#[test]
fn empty_value_is_an_error() {
    assert_eq!(parse_since_at("  ", Utc::now()), Err(SinceError::Empty));
}

#[test]
fn garbage_is_an_error_with_guidance() {
    let err = parse_since_at("last tuesday", Utc::now()).unwrap_err();

    assert_eq!(
        err,
        SinceError::InvalidFormat {
            input: "last tuesday".to_string()
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("'1h'"), "{msg}");
    assert!(msg.contains("YYYY-MM-DD"), "{msg}");
}

#[test]
fn huge_duration_is_out_of_range() {
    let err = parse_since_at("100000000000years", Utc::now()).unwrap_err();

    assert!(
        matches!(err, SinceError::OutOfRange { .. } | SinceError::InvalidFormat { .. }),
        "unexpected: {err:?}"
    );
}
