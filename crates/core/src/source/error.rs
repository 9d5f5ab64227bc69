//! Error types for the source module.

use std::path::PathBuf;
use thiserror::Error;

use crate::record::Field;

/// Errors that can occur while reading input records.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Input file could not be opened.
    #[error("Input file not found or unreadable: {path}")]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column label is absent from the header row.
    #[error("Required column for `{field}` not found in header: {label:?}")]
    SchemaMismatch { field: Field, label: String },

    /// The header row itself could not be read.
    #[error("Failed to read CSV header: {0}")]
    Header(#[source] csv::Error),

    /// A data row is malformed or not valid UTF-8.
    #[error("Failed to parse CSV row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

impl SourceError {
    /// Creates a new schema mismatch error.
    pub fn schema_mismatch(field: Field, label: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            field,
            label: label.into(),
        }
    }
}
