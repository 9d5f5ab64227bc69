//! Testing utilities and in-memory implementations of the I/O traits.
//!
//! This module lets conversion runs be exercised without touching the
//! filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use tickets_core::testing::{fixtures, MemorySink, MemorySource};
//! use tickets_core::{run_conversion, OutputFormat};
//!
//! let source = MemorySource::new(vec![fixtures::question_row(1, "1", "1", "1")]);
//! let sink = MemorySink::new();
//! run_conversion(&source, &sink, OutputFormat::Plain)?;
//! assert_eq!(sink.write_count(), 1);
//! ```

mod memory_sink;
mod memory_source;

pub use memory_sink::MemorySink;
pub use memory_source::MemorySource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::record::{ColumnMap, Field, FlatRecord};

    /// A complete three-option question row with reasonable defaults.
    pub fn question_row(
        row: usize,
        ticket: &str,
        question_number: &str,
        correct_answer: &str,
    ) -> FlatRecord {
        FlatRecord::new(row)
            .with(Field::TicketNumber, ticket)
            .with(Field::QuestionNumber, question_number)
            .with(Field::Text, format!("Вопрос {}.{}", ticket, question_number))
            .with(Field::Option1, "Да")
            .with(Field::Option2, "Нет")
            .with(Field::Option3, "Не знаю")
            .with(Field::CorrectAnswer, correct_answer)
            .with(Field::Category, "Общие положения")
    }

    /// CSV header line quoting every configured label, so embedded line
    /// breaks survive.
    pub fn csv_header(columns: &ColumnMap) -> String {
        columns
            .iter()
            .map(|(_, label)| csv_quote(label))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// One CSV data line with values in [`Field::ALL`] order.
    pub fn csv_line(values: [&str; 12]) -> String {
        values
            .iter()
            .map(|v| csv_quote(v))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn csv_quote(value: &str) -> String {
        format!("\"{}\"", value.replace('"', "\"\""))
    }
}
