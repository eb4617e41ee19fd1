use crate::cli::CommandContext;
use crate::health::{HealthReport, check_health};
use crate::logging::OutputMode;
use anyhow::Result;
use std::io::Write;

pub fn run_doctor<W: Write>(ctx: &CommandContext, out: &mut W) -> Result<HealthReport> {
    let report = check_health(&ctx.paths, &ctx.config);

    match ctx.mode {
        OutputMode::Json => writeln!(out, "{}", report.render_json()?)?,
        OutputMode::Human if ctx.color => write!(out, "{}", report.render_pretty())?,
        OutputMode::Human => write!(out, "{}", report.render_plain())?,
    }

    Ok(report)
}
