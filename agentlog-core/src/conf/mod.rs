mod error;
mod loader;
mod paths;
mod types;


pub use error::ConfigError;
pub use loader::{load_config, validate};
pub use paths::{AGENTLOG_DIR, CONFIG_FILE, ERRORS_FILE, LogPaths};
pub use types::AgentlogConfig;
