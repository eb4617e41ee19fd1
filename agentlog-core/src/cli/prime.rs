use crate::cli::CommandContext;
use crate::logging::OutputMode;
use crate::logs::{
    SummaryAggregate, log_skipped, read_entries, render_summary, render_summary_json, summarize,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::io::Write;

/// Aggregate the log as of `now`. A missing file is reported in the summary, not as an error.
pub fn build_summary(ctx: &CommandContext, now: DateTime<Utc>) -> Result<SummaryAggregate> {
    let path = &ctx.paths.errors_file;

    match read_entries(path) {
        Ok(batch) => {
            log_skipped(path, &batch);
            Ok(summarize(&batch.entries, now, ctx.config.top_n))
        }
        Err(e) if e.is_not_found() => Ok(SummaryAggregate::missing_log(now)),
        Err(e) => Err(e.into()),
    }
}

pub fn run_prime<W: Write>(ctx: &CommandContext, now: DateTime<Utc>, out: &mut W) -> Result<()> {
    let summary = build_summary(ctx, now)?;

    match ctx.mode {
        OutputMode::Json => writeln!(out, "{}", render_summary_json(&summary)?)?,
        OutputMode::Human => write!(out, "{}", render_summary(&summary))?,
    }

    Ok(())
}
