//! Error types for the flow manifest generator.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that stop a generation run.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to list directory {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create flows directory {path:?}: {source}")]
    RootSetup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write manifest to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for ManifestError {
    fn from(err: config::ConfigError) -> Self {
        ManifestError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ManifestError {
    fn from(err: toml::ser::Error) -> Self {
        ManifestError::Config(format!("Failed to render configuration: {}", err))
    }
}

/// A single file that could not be read.
///
/// Never fatal: the scanner logs it and substitutes empty content.
#[derive(Debug, Error)]
#[error("Could not read file {path:?}: {source}")]
pub struct ReadFailure {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
