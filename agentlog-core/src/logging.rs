use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "AGENTLOG_LOG";

/// Initialize diagnostics on stderr; stdout carries command output only.
///
/// - Filter comes from `AGENTLOG_LOG` (defaults to "warn" if not set)
/// - JSON lines with flattened fields when stderr is not a terminal
/// - Compact human format when it is
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    if io::stderr().is_terminal() {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .with_target(false)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init();
    }
}

/// Color only when stdout is an interactive terminal and `NO_COLOR` is unset.
pub fn use_color() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Human }
    }
}
