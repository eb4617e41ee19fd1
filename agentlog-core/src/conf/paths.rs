use std::path::{Path, PathBuf};

pub const AGENTLOG_DIR: &str = ".agentlog";
pub const ERRORS_FILE: &str = "errors.jsonl";
pub const CONFIG_FILE: &str = "config.toml";

/// Filesystem locations derived from a project's base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    pub dir: PathBuf,
    pub errors_file: PathBuf,
    pub config_file: PathBuf,
}

impl LogPaths {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let dir = base_dir.as_ref().join(AGENTLOG_DIR);
        Self {
            errors_file: dir.join(ERRORS_FILE),
            config_file: dir.join(CONFIG_FILE),
            dir,
        }
    }
}
