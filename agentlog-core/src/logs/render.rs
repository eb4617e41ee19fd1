use super::summary::SummaryAggregate;
use crate::logs::types::Entry;
use std::fmt::Write;

/// Listing used by the `errors` command. `total` is the number of valid entries in the log.
pub fn render_entries(entries: &[Entry], total: usize) -> String {
    if entries.is_empty() {
        return "No errors match the filter criteria.\n".to_string();
    }

    let mut out = String::new();

    for (i, e) in entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "Error: {}", e.message);
        let _ = writeln!(out, "  Source: {} | Type: {}", e.source, e.error_type);
        let _ = writeln!(out, "  Time: {}", e.timestamp);
    }

    if entries.len() < total {
        let _ = writeln!(
            out,
            "\nShowing {} of {} errors (use --limit to see more)",
            entries.len(),
            total
        );
    }

    out
}

pub fn render_entries_json(entries: &[Entry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

/// One entry as it appears in `tail` output.
pub fn render_tail_entry(e: &Entry) -> String {
    format!(
        "[{}] {}\n  Source: {} | Type: {}\n",
        e.timestamp, e.message, e.source, e.error_type
    )
}

pub fn render_tail_entry_json(e: &Entry) -> serde_json::Result<String> {
    serde_json::to_string(e)
}

pub fn render_summary(summary: &SummaryAggregate) -> String {
    let mut out = String::new();

    if summary.no_log_file {
        out.push_str("agentlog: No error log found (.agentlog/errors.jsonl)\n");
        out.push_str("  Run 'agentlog init' to set up error tracking\n");
        return out;
    }

    if summary.total_errors == 0 {
        out.push_str("agentlog: No errors logged\n");
        return out;
    }

    let noun = if summary.total_errors == 1 {
        "error"
    } else {
        "errors"
    };
    let _ = write!(out, "agentlog: {} {}", summary.total_errors, noun);
    if summary.last_hour_errors > 0 {
        let _ = write!(out, " ({} in last hour)", summary.last_hour_errors);
    }
    out.push('\n');

    if !summary.top_error_types.is_empty() {
        let types: Vec<String> = summary
            .top_error_types
            .iter()
            .map(|t| format!("{} ({})", t.error_type, t.count))
            .collect();
        let _ = writeln!(out, "  Top types: {}", types.join(", "));
    }

    if !summary.top_sources.is_empty() {
        let sources: Vec<String> = summary
            .top_sources
            .iter()
            .map(|s| format!("{} ({})", s.source, s.count))
            .collect();
        let _ = writeln!(out, "  Sources: {}", sources.join(", "));
    }

    if !summary.actionable_tip.is_empty() {
        let _ = writeln!(out, "  Tip: {}", summary.actionable_tip);
    }

    out
}

pub fn render_summary_json(summary: &SummaryAggregate) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
