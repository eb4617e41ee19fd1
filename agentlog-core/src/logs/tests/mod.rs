mod since_tests;

use crate::logs::Entry;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub(super) fn entry(timestamp: &str, source: &str, error_type: &str, message: &str) -> Entry {
    Entry {
        timestamp: timestamp.to_string(),
        source: source.to_string(),
        error_type: error_type.to_string(),
        message: message.to_string(),
        context: None,
    }
}

pub(super) fn line(timestamp: &str, source: &str, error_type: &str, message: &str) -> String {
    serde_json::to_string(&entry(timestamp, source, error_type, message)).unwrap()
}

pub(super) fn append(path: &Path, text: &str) {
    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    f.write_all(text.as_bytes()).unwrap();
}
