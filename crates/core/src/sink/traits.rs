//! Trait definitions for the sink module.

use serde::Serialize;

use super::error::SinkError;

/// What a sink reports after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkReceipt {
    /// Size of the serialized document in bytes.
    pub bytes: usize,
    /// Lowercase hex SHA-256 of the serialized document.
    pub sha256: String,
}

/// Destination for a fully assembled document.
///
/// Implementations receive the whole document at once and must not leave
/// partial output behind on failure.
pub trait DocumentSink {
    /// Returns a short name for logs.
    fn name(&self) -> &str;

    /// Serializes and stores the document.
    fn write<T: Serialize + ?Sized>(&self, document: &T) -> Result<SinkReceipt, SinkError>;
}
