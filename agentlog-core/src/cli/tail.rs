use crate::cli::{CommandContext, NOT_INITIALIZED};
use crate::logging::OutputMode;
use crate::logs::{ShutdownSignal, TailError, TailWatcher, render_tail_entry, render_tail_entry_json};
use anyhow::Result;
use std::io::{self, Write};

/// Replay the log, then stream new entries until `shutdown` fires.
pub async fn run_tail<W: Write>(
    ctx: &CommandContext,
    shutdown: ShutdownSignal,
    out: &mut W,
) -> Result<()> {
    let mut watcher = TailWatcher::new(&ctx.paths.errors_file, ctx.config.poll_interval());
    let mode = ctx.mode;

    let result = watcher
        .run(shutdown, |entry| {
            let rendered = match mode {
                OutputMode::Human => render_tail_entry(entry),
                OutputMode::Json => render_tail_entry_json(entry).map_err(io::Error::other)?,
            };
            writeln!(out, "{rendered}")?;
            out.flush()
        })
        .await;

    match result {
        Ok(()) => Ok(()),
        Err(TailError::NotFound { .. }) => {
            writeln!(out, "{NOT_INITIALIZED}")?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
