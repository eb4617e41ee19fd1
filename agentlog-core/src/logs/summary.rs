use crate::logs::parse::parse_timestamp;
use crate::logs::types::Entry;
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorTypeCount {
    pub error_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

/// Aggregate view over the whole log, relative to the moment it was computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryAggregate {
    pub total_errors: usize,
    pub last_24h_errors: usize,
    pub last_hour_errors: usize,
    pub top_error_types: Vec<ErrorTypeCount>,
    pub top_sources: Vec<SourceCount>,
    pub actionable_tip: String,
    pub generated_at: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_log_file: bool,
}

impl SummaryAggregate {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            total_errors: 0,
            last_24h_errors: 0,
            last_hour_errors: 0,
            top_error_types: Vec::new(),
            top_sources: Vec::new(),
            actionable_tip: String::new(),
            generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            no_log_file: false,
        }
    }

    /// The log file does not exist yet, which is different from an empty log.
    pub fn missing_log(now: DateTime<Utc>) -> Self {
        Self {
            no_log_file: true,
            ..Self::empty(now)
        }
    }
}

/// Frequency table that remembers first-seen order for stable tie-breaks.
#[derive(Default)]
struct FrequencyTable<'a> {
    index: HashMap<&'a str, usize>,
    counts: Vec<(&'a str, usize)>,
}

impl<'a> FrequencyTable<'a> {
    fn record(&mut self, key: &'a str) {
        match self.index.get(key) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(key, self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    fn top(mut self, n: usize) -> Vec<(&'a str, usize)> {
        // sort_by is stable, so equal counts keep first-seen order.
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts.truncate(n);
        self.counts
    }
}

pub fn summarize(entries: &[Entry], now: DateTime<Utc>, top_n: usize) -> SummaryAggregate {
    let mut summary = SummaryAggregate::empty(now);
    if entries.is_empty() {
        return summary;
    }

    let hour_ago = now - TimeDelta::hours(1);
    let day_ago = now - TimeDelta::hours(24);

    let mut types = FrequencyTable::default();
    let mut sources = FrequencyTable::default();

    for entry in entries {
        if let Some(ts) = parse_timestamp(&entry.timestamp) {
            if ts > hour_ago {
                summary.last_hour_errors += 1;
            }
            if ts > day_ago {
                summary.last_24h_errors += 1;
            }
        }

        types.record(&entry.error_type);
        sources.record(&entry.source);
    }

    summary.total_errors = entries.len();
    summary.top_error_types = types
        .top(top_n)
        .into_iter()
        .map(|(error_type, count)| ErrorTypeCount {
            error_type: error_type.to_string(),
            count,
        })
        .collect();
    summary.top_sources = sources
        .top(top_n)
        .into_iter()
        .map(|(source, count)| SourceCount {
            source: source.to_string(),
            count,
        })
        .collect();
    summary.actionable_tip = actionable_tip(&summary);

    summary
}

/// One sentence naming the dominant type and source. Percentage is floored.
pub fn actionable_tip(summary: &SummaryAggregate) -> String {
    let (Some(top_type), Some(top_source)) =
        (summary.top_error_types.first(), summary.top_sources.first())
    else {
        return String::new();
    };

    if summary.total_errors == 0 {
        return String::new();
    }

    let pct = top_type.count * 100 / summary.total_errors;

    format!(
        "Focus on {} in {} - {}% of errors",
        top_type.error_type, top_source.source, pct
    )
}
