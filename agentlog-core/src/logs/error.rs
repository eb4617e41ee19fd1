use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("no errors file found at {path}")]
    NotFound { path: PathBuf },

    #[error("{path} exists but is not a regular file")]
    NotAFile { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LogError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Concrete next step for conditions the surrounding workflow can fix.
pub fn error_hint(err: &LogError) -> Option<&'static str> {
    match err {
        LogError::NotFound { .. } => Some("Run 'agentlog init' to set up."),
        LogError::NotAFile { .. } => Some(
            "errors.jsonl must be a regular file.\n\
             \n\
             Remove or rename the conflicting path, then run 'agentlog init'.",
        ),
        LogError::Io { .. } => None,
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SinceError {
    #[error("empty since value")]
    Empty,

    #[error("invalid time format: {input} (use '1h', '30m', 'YYYY-MM-DD' or an RFC 3339 timestamp)")]
    InvalidFormat { input: String },

    #[error("time window out of range: {input}")]
    OutOfRange { input: String },
}

#[derive(Debug, Error)]
pub enum TailError {
    #[error("no errors file found at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write tail output: {0}")]
    Emit(#[source] io::Error),
}

impl From<LogError> for TailError {
    fn from(err: LogError) -> Self {
        match err {
            LogError::NotFound { path } => TailError::NotFound { path },
            LogError::NotAFile { path } => TailError::Io {
                path,
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            },
            LogError::Io { path, source } => TailError::Io { path, source },
        }
    }
}
