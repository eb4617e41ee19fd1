mod ai_help;
mod doctor;
mod errors;
mod prime;
mod tail;


pub use ai_help::*;
pub use doctor::*;
pub use errors::*;
pub use prime::*;
pub use tail::*;

use crate::conf::{AgentlogConfig, LogPaths};
use crate::logging::OutputMode;

pub(crate) const NOT_INITIALIZED: &str = "No errors file found. Run 'agentlog init' to set up.";

/// Everything a command needs from its caller. Nothing is read from process-global state.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub paths: LogPaths,
    pub config: AgentlogConfig,
    pub mode: OutputMode,
    pub color: bool,
}

impl CommandContext {
    pub fn new(paths: LogPaths, config: AgentlogConfig, mode: OutputMode) -> Self {
        Self {
            paths,
            config,
            mode,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
