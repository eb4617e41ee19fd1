use crate::logs::error::SinceError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

/// Naive layouts accepted for `--since`, read as UTC.
const NAIVE_SINCE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Resolve a `--since` value against the current time.
pub fn parse_since(input: &str) -> Result<DateTime<Utc>, SinceError> {
    parse_since_at(input, Utc::now())
}

/// Resolve a `--since` value to an absolute threshold.
///
/// Relative durations (`1h`, `30m`, `1h30m`, `2days`) are subtracted from `now`.
/// Otherwise the value must be a calendar date (`YYYY-MM-DD`, midnight UTC) or a
/// full timestamp.
pub fn parse_since_at(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, SinceError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SinceError::Empty);
    }

    if let Ok(duration) = humantime::parse_duration(input) {
        let out_of_range = || SinceError::OutOfRange {
            input: input.to_string(),
        };
        let delta = TimeDelta::from_std(duration).map_err(|_| out_of_range())?;
        return now.checked_sub_signed(delta).ok_or_else(out_of_range);
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }

    NAIVE_SINCE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| SinceError::InvalidFormat {
            input: input.to_string(),
        })
}
