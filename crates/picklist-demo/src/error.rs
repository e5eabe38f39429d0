use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read items file {path}: {source}")]
    ItemsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse items file {path}: {source}")]
    ItemsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode report: {0}")]
    Report(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;

impl DemoError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::Validation(_)) => 2,
            Self::Config(_) | Self::ItemsIo { .. } | Self::ItemsParse { .. } => 3,
            Self::Report(_) => 1,
        }
    }
}
