use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the curator batch steps.
///
/// The categorization core itself never fails; these variants cover the
/// surrounding file handling and configuration.
#[derive(Error, Debug)]
pub enum CuratorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CuratorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
