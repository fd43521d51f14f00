use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// A column or forced-row record that could not be parsed (1-based line number).
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    /// Parameters that would make the row builder non-terminating.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for LayoutError {
    fn from(err: toml::de::Error) -> Self {
        LayoutError::Config(format!("TOML parse error: {}", err))
    }
}

impl LayoutError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        LayoutError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
