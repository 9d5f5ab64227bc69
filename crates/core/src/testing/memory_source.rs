//! In-memory record source for testing.

use crate::record::{Field, FlatRecord};
use crate::source::{RecordSource, SourceError};

/// Record source backed by a vector.
///
/// # Example
///
/// ```rust,ignore
/// use tickets_core::testing::{fixtures, MemorySource};
///
/// let source = MemorySource::new(vec![fixtures::question_row(1, "1", "1", "2")]);
/// let records = source.read_records()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<FlatRecord>,
    /// When set, reading fails with a schema mismatch on this label.
    missing_label: Option<String>,
}

impl MemorySource {
    pub fn new(records: Vec<FlatRecord>) -> Self {
        Self {
            records,
            missing_label: None,
        }
    }

    /// A source whose header lacks the ticket-number column.
    pub fn failing(missing_label: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            missing_label: Some(missing_label.into()),
        }
    }
}

impl RecordSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn read_records(&self) -> Result<Vec<FlatRecord>, SourceError> {
        match &self.missing_label {
            Some(label) => Err(SourceError::schema_mismatch(Field::TicketNumber, label.clone())),
            None => Ok(self.records.clone()),
        }
    }
}
