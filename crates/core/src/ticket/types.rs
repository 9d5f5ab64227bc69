//! Core ticket data types.

use serde::{Deserialize, Serialize};

/// A single quiz question, as written to the output document.
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    /// Three or four answer options, in sheet order.
    pub options: Vec<String>,
    /// 0-based index into `options`. Not range-checked.
    pub correct_answer: i64,
    pub category: String,
    /// Position of the question inside its ticket. Used as the sort key.
    pub question_number: i64,
    pub image_url: String,
    pub hint: String,
    pub video_url: String,
}

impl Question {
    /// Whether `correct_answer` points at one of the options.
    pub fn has_valid_answer(&self) -> bool {
        usize::try_from(self.correct_answer)
            .map(|idx| idx < self.options.len())
            .unwrap_or(false)
    }
}

/// A numbered group of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub number: i64,
    /// Ascending by `question_number`; ties keep input order.
    pub questions: Vec<Question>,
}

/// The assembled document: tickets ascending by number.
///
/// Serializes as a bare JSON array of tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputDocument {
    tickets: Vec<Ticket>,
}

impl OutputDocument {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn into_tickets(self) -> Vec<Ticket> {
        self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Total number of questions across all tickets.
    pub fn question_count(&self) -> usize {
        self.tickets.iter().map(|t| t.questions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: usize, correct_answer: i64) -> Question {
        Question {
            text: "Какой знак?".to_string(),
            options: (1..=options).map(|i| format!("Вариант {}", i)).collect(),
            correct_answer,
            category: "Знаки".to_string(),
            question_number: 1,
            image_url: String::new(),
            hint: String::new(),
            video_url: String::new(),
        }
    }

    #[test]
    fn test_question_serializes_camel_case_in_order() {
        let json = serde_json::to_string(&question(3, 0)).unwrap();
        let keys = [
            "\"text\"",
            "\"options\"",
            "\"correctAnswer\"",
            "\"category\"",
            "\"questionNumber\"",
            "\"imageUrl\"",
            "\"hint\"",
            "\"videoUrl\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);
    }

    #[test]
    fn test_document_serializes_as_array() {
        let doc = OutputDocument::new(vec![Ticket {
            number: 4,
            questions: vec![question(4, 3)],
        }]);
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["number"], 4);
        assert_eq!(value[0]["questions"][0]["correctAnswer"], 3);
        assert_eq!(doc.question_count(), 1);
    }

    #[test]
    fn test_has_valid_answer() {
        assert!(question(3, 0).has_valid_answer());
        assert!(question(3, 2).has_valid_answer());
        assert!(!question(3, 3).has_valid_answer());
        assert!(question(4, 3).has_valid_answer());
        assert!(!question(3, -1).has_valid_answer());
    }
}
