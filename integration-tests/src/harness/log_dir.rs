use agentlog_core::cli::CommandContext;
use agentlog_core::conf::{AgentlogConfig, LogPaths};
use agentlog_core::logging::OutputMode;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

/// A throwaway project directory with an optional `.agentlog/` inside.
pub struct TestLogDir {
    dir: TempDir,
    pub paths: LogPaths,
}

impl TestLogDir {
    /// Project without `.agentlog/`.
    pub fn bare() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let paths = LogPaths::new(dir.path());
        Self { dir, paths }
    }

    /// Project with `.agentlog/` but no log file yet.
    pub fn initialized() -> Self {
        let this = Self::bare();
        fs::create_dir_all(&this.paths.dir).unwrap();
        this
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn append(&self, text: &str) {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.paths.errors_file)
            .unwrap();
        f.write_all(text.as_bytes()).unwrap();
        f.flush().unwrap();
    }

    pub fn append_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for l in lines {
            text.push_str(l.as_ref());
            text.push('\n');
        }
        self.append(&text);
    }

    pub fn write_config(&self, toml: &str) {
        fs::write(&self.paths.config_file, toml).unwrap();
    }

    pub fn context(&self, mode: OutputMode) -> CommandContext {
        self.context_with(AgentlogConfig::default(), mode)
    }

    pub fn context_with(&self, config: AgentlogConfig, mode: OutputMode) -> CommandContext {
        CommandContext::new(self.paths.clone(), config, mode)
    }
}

/// One serialized entry with a fixed timestamp.
pub fn line(source: &str, error_type: &str, message: &str) -> String {
    json!({
        "timestamp": "2025-01-15T10:30:00Z",
        "source": source,
        "error_type": error_type,
        "message": message,
    })
    .to_string()
}

/// One serialized entry stamped with `at`.
pub fn line_at(at: DateTime<Utc>, source: &str, error_type: &str, message: &str) -> String {
    json!({
        "timestamp": at.to_rfc3339(),
        "source": source,
        "error_type": error_type,
        "message": message,
    })
    .to_string()
}
