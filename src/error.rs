use std::path::PathBuf;
use thiserror::Error;

/// Failure of a command typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("{0}")]
    HandlerFailure(String),
}

impl CommandError {
    pub fn usage(usage: &str) -> Self {
        Self::HandlerFailure(format!("Usage: {}", usage))
    }
}

/// Backspace on a command line that has nothing left to delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("command line is already empty")]
pub struct BufferEditInvalid;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
