use crate::cli::{CommandContext, NOT_INITIALIZED};
use crate::logging::OutputMode;
use crate::logs::{
    EntryFilter, log_skipped, parse_since, read_entries, render_entries, render_entries_json,
    take_most_recent,
};
use anyhow::{Context, Result};
use std::io::Write;

/// Pre-parsed flags of the `errors` command.
#[derive(Debug, Clone, Default)]
pub struct ErrorsQuery {
    pub source: String,
    pub error_type: String,
    pub since: Option<String>,
    /// `0` shows everything.
    pub limit: usize,
}

pub fn run_errors<W: Write>(ctx: &CommandContext, query: &ErrorsQuery, out: &mut W) -> Result<()> {
    let since = query
        .since
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(parse_since)
        .transpose()
        .context("invalid --since value")?;

    let path = &ctx.paths.errors_file;
    let batch = match read_entries(path) {
        Ok(batch) => batch,
        Err(e) if e.is_not_found() => {
            writeln!(out, "{NOT_INITIALIZED}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    log_skipped(path, &batch);

    if batch.entries.is_empty() {
        writeln!(out, "No errors recorded yet.")?;
        return Ok(());
    }

    let total = batch.entries.len();
    let filter = EntryFilter::new()
        .with_source(query.source.as_str())
        .with_error_type(query.error_type.as_str())
        .with_since(since);

    let matched = take_most_recent(filter.apply(batch.entries), query.limit);
    tracing::debug!(total, shown = matched.len(), "errors query");

    match ctx.mode {
        OutputMode::Json => writeln!(out, "{}", render_entries_json(&matched)?)?,
        OutputMode::Human => write!(out, "{}", render_entries(&matched, total))?,
    }

    Ok(())
}
