//! Flat record types: one input row before grouping.

use std::collections::BTreeMap;
use std::fmt;

/// A logical input column.
///
/// The physical header label of each field lives in [`ColumnMap`](super::ColumnMap),
/// so the same field can be read from sheets with different headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    TicketNumber,
    QuestionNumber,
    Text,
    Option1,
    Option2,
    Option3,
    Option4,
    CorrectAnswer,
    Category,
    ImageUrl,
    Hint,
    VideoUrl,
}

impl Field {
    /// Every field, in sheet order.
    pub const ALL: [Field; 12] = [
        Field::TicketNumber,
        Field::QuestionNumber,
        Field::Text,
        Field::Option1,
        Field::Option2,
        Field::Option3,
        Field::Option4,
        Field::CorrectAnswer,
        Field::Category,
        Field::ImageUrl,
        Field::Hint,
        Field::VideoUrl,
    ];

    /// Whether the header must contain this column.
    ///
    /// Optional columns read as empty strings when the header lacks them.
    pub fn is_required(self) -> bool {
        !matches!(
            self,
            Field::Option4 | Field::ImageUrl | Field::Hint | Field::VideoUrl
        )
    }

    /// Stable key used in configuration files and diagnostics.
    pub fn key(self) -> &'static str {
        match self {
            Field::TicketNumber => "ticket_number",
            Field::QuestionNumber => "question_number",
            Field::Text => "text",
            Field::Option1 => "option1",
            Field::Option2 => "option2",
            Field::Option3 => "option3",
            Field::Option4 => "option4",
            Field::CorrectAnswer => "correct_answer",
            Field::Category => "category",
            Field::ImageUrl => "image_url",
            Field::Hint => "hint",
            Field::VideoUrl => "video_url",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One row of tabular input, keyed by [`Field`].
///
/// Values are kept verbatim. A field that was never set reads as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRecord {
    /// 1-based data row number (the header is row 0).
    row: usize,
    values: BTreeMap<Field, String>,
}

impl FlatRecord {
    /// Create an empty record for the given data row.
    pub fn new(row: usize) -> Self {
        Self {
            row,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Raw value of a field, or `""` when absent.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Owned copy of a field value.
    pub fn get_owned(&self, field: Field) -> String {
        self.get(field).to_string()
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// True when the ticket-number cell is empty or whitespace only.
    pub fn is_blank_ticket(&self) -> bool {
        self.get(Field::TicketNumber).trim().is_empty()
    }
}
