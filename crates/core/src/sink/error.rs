//! Error types for the sink module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the output document.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The document could not be serialized.
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The output file could not be written.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
