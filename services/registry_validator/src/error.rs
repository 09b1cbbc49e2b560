//! Error types for the registry validator
//!
//! Data-quality problems never surface here; they become diagnostics. These
//! errors abort the run.

use std::path::PathBuf;
use thiserror::Error;

use registry_config::ChainError;
use token_metadata_adapter::MetadataError;

/// Result type alias for validator operations
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// A data file names a chain the tooling does not know
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Metadata client could not be built for a chain
    #[error("Metadata source error: {0}")]
    Metadata(#[from] MetadataError),
}

impl From<ChainError> for RegistryError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::Unsupported(chain) => RegistryError::UnsupportedChain(chain),
        }
    }
}
