use serde::{Deserialize, Serialize};
use std::time::Duration;

const MIB: u64 = 1024 * 1024;

/// Tunables for every command. All keys are optional in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentlogConfig {
    pub poll_interval_ms: u64,
    /// Size above which `doctor` warns.
    pub warn_file_size: u64,
    /// Size above which `doctor` reports that rotation is needed.
    pub max_file_size: u64,
    pub top_n: usize,
    pub malformed_sample_size: usize,
    pub default_limit: usize,
}

impl Default for AgentlogConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 500,
            warn_file_size: 8 * MIB,
            max_file_size: 10 * MIB,
            top_n: 3,
            malformed_sample_size: 5,
            default_limit: 10,
        }
    }
}

impl AgentlogConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
