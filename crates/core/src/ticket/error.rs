//! Error types for ticket assembly.

use std::num::ParseIntError;

use thiserror::Error;

use crate::record::Field;

/// Errors that abort assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    /// A numeric field could not be parsed as an integer.
    #[error("row {row}: field `{field}` is not a valid integer: {value:?}")]
    InvalidInteger {
        row: usize,
        field: Field,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl AssembleError {
    /// Data row the error refers to.
    pub fn row(&self) -> usize {
        match self {
            Self::InvalidInteger { row, .. } => *row,
        }
    }

    /// Field the error refers to.
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidInteger { field, .. } => *field,
        }
    }
}
