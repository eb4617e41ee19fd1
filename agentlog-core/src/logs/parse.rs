use crate::logs::types::{Entry, ParsedLine, SkipReason};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};

const REQUIRED_FIELDS: [&str; 4] = ["timestamp", "source", "error_type", "message"];

/// Naive layouts tried after RFC 3339; these carry no offset and are read as UTC.
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Decode one line of `errors.jsonl`.
///
/// Returns `None` for blank lines. Anything that is not an object carrying the four
/// required non-empty string fields is reported as [`ParsedLine::Skipped`].
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let value = match serde_json::from_str::<Value>(line) {
        Ok(value) => value,
        Err(e) => return Some(ParsedLine::Skipped(SkipReason::InvalidJson(e.to_string()))),
    };

    let Value::Object(mut object) = value else {
        return Some(ParsedLine::Skipped(SkipReason::NotAnObject));
    };

    Some(match entry_from_object(&mut object) {
        Ok(entry) => ParsedLine::Parsed(entry),
        Err(reason) => ParsedLine::Skipped(reason),
    })
}

fn entry_from_object(object: &mut Map<String, Value>) -> Result<Entry, SkipReason> {
    let mut required = REQUIRED_FIELDS.map(|_| String::new());

    for (slot, name) in required.iter_mut().zip(REQUIRED_FIELDS) {
        *slot = match object.remove(name) {
            None => return Err(SkipReason::MissingField(name)),
            Some(Value::String(s)) if s.is_empty() => return Err(SkipReason::EmptyField(name)),
            Some(Value::String(s)) => s,
            Some(_) => return Err(SkipReason::WrongType(name)),
        };
    }

    let context = match object.remove("context") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => return Err(SkipReason::WrongType("context")),
    };

    let [timestamp, source, error_type, message] = required;

    Ok(Entry {
        timestamp,
        source,
        error_type,
        message,
        context,
    })
}

/// Parse an entry timestamp. Unparseable values yield `None` so callers can exclude them.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(ts) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(ts, fmt).ok())
        .map(|naive| naive.and_utc())
}
