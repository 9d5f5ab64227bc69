//! Trait definitions for the source module.

use super::error::SourceError;
use crate::record::FlatRecord;

/// Anything that can produce the full list of input records.
pub trait RecordSource {
    /// Returns a short name for logs.
    fn name(&self) -> &str;

    /// Reads every record, in input order.
    fn read_records(&self) -> Result<Vec<FlatRecord>, SourceError>;
}
