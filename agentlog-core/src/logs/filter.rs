use crate::logs::parse::parse_timestamp;
use crate::logs::types::Entry;
use chrono::{DateTime, Utc};

/// Independent predicates over source, error type and a time threshold.
///
/// Unset dimensions match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    source: Option<String>,
    error_type: Option<String>,
    since: Option<DateTime<Utc>>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty string leaves the dimension unfiltered.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = non_empty(source.into());
        self
    }

    /// An empty string leaves the dimension unfiltered.
    pub fn with_error_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = non_empty(error_type.into());
        self
    }

    pub fn with_since(mut self, since: Option<DateTime<Utc>>) -> Self {
        self.since = since;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.error_type.is_none() && self.since.is_none()
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if self.source.as_ref().is_some_and(|s| entry.source != *s) {
            return false;
        }

        if self
            .error_type
            .as_ref()
            .is_some_and(|t| entry.error_type != *t)
        {
            return false;
        }

        if let Some(since) = self.since {
            // Entries whose timestamp cannot be read are never inside a time window.
            return parse_timestamp(&entry.timestamp).is_some_and(|ts| ts >= since);
        }

        true
    }

    pub fn apply(&self, entries: Vec<Entry>) -> Vec<Entry> {
        if self.is_empty() {
            return entries;
        }
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Keep the last `limit` entries in file order. `0` means no limit.
pub fn take_most_recent(mut entries: Vec<Entry>, limit: usize) -> Vec<Entry> {
    if limit > 0 && entries.len() > limit {
        entries.drain(..entries.len() - limit);
    }
    entries
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}
