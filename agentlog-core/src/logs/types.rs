use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One valid record from `errors.jsonl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub timestamp: String,
    pub source: String,
    pub error_type: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

/// Outcome of decoding a single non-blank line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Parsed(Entry),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    InvalidJson(String),
    InvalidUtf8,
    NotAnObject,
    MissingField(&'static str),
    EmptyField(&'static str),
    WrongType(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidJson(msg) => write!(f, "invalid JSON: {msg}"),
            SkipReason::InvalidUtf8 => write!(f, "line is not valid UTF-8"),
            SkipReason::NotAnObject => write!(f, "line is not a JSON object"),
            SkipReason::MissingField(name) => write!(f, "missing required field '{name}'"),
            SkipReason::EmptyField(name) => write!(f, "required field '{name}' is empty"),
            SkipReason::WrongType(name) => write!(f, "field '{name}' has the wrong type"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based, relative to where the read started.
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Result of one pass over the log file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadBatch {
    pub entries: Vec<Entry>,
    pub skipped: Vec<SkippedLine>,
    /// Byte position just past the last consumed line.
    pub offset: u64,
    /// Set when the requested offset was past the end of the file and the read restarted at 0.
    pub truncated: bool,
}
