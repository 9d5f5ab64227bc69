//! Reshapes an assembled document for database import.
//!
//! Options become `{ text, isCorrect }` objects. A ticket with any question
//! whose correct answer falls outside its options is rejected whole; the
//! remaining tickets are still imported.

use std::fmt;

use serde::Serialize;

use super::types::{OutputDocument, Question, Ticket};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOption {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportQuestion {
    pub text: String,
    pub image_url: String,
    pub options: Vec<ImportOption>,
    pub hint: String,
    pub video_url: String,
    pub category: String,
    pub question_number: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportTicket {
    pub number: i64,
    pub questions: Vec<ImportQuestion>,
}

/// A ticket left out of the import batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedTicket {
    pub number: i64,
    /// 1-based position of the first offending question inside the ticket.
    pub question_position: usize,
    pub correct_answer: i64,
    pub option_count: usize,
}

impl fmt::Display for RejectedTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid correctAnswer ({}) for question {} in ticket {} ({} options)",
            self.correct_answer, self.question_position, self.number, self.option_count
        )
    }
}

/// Result of [`prepare_import`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    /// Accepted tickets, in document order.
    pub tickets: Vec<ImportTicket>,
    pub rejected: Vec<RejectedTicket>,
}

impl ImportBatch {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Convert every ticket to its import shape, rejecting invalid ones.
pub fn prepare_import(document: &OutputDocument) -> ImportBatch {
    let mut batch = ImportBatch::default();

    for ticket in document.tickets() {
        match convert_ticket(ticket) {
            Ok(converted) => batch.tickets.push(converted),
            Err(rejected) => batch.rejected.push(rejected),
        }
    }

    batch
}

fn convert_ticket(ticket: &Ticket) -> Result<ImportTicket, RejectedTicket> {
    let questions = ticket
        .questions
        .iter()
        .enumerate()
        .map(|(idx, question)| {
            if question.has_valid_answer() {
                Ok(convert_question(question))
            } else {
                Err(RejectedTicket {
                    number: ticket.number,
                    question_position: idx + 1,
                    correct_answer: question.correct_answer,
                    option_count: question.options.len(),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ImportTicket {
        number: ticket.number,
        questions,
    })
}

fn convert_question(question: &Question) -> ImportQuestion {
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(idx, text)| ImportOption {
            text: text.clone(),
            is_correct: i64::try_from(idx).map_or(false, |i| i == question.correct_answer),
        })
        .collect();

    ImportQuestion {
        text: question.text.clone(),
        image_url: question.image_url.clone(),
        options,
        hint: question.hint.clone(),
        video_url: question.video_url.clone(),
        category: question.category.clone(),
        question_number: question.question_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(number: i64, correct_answer: i64) -> Question {
        Question {
            text: format!("Вопрос {}", number),
            options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            correct_answer,
            category: "Общие".to_string(),
            question_number: number,
            image_url: "https://example.com/1.png".to_string(),
            hint: "подсказка".to_string(),
            video_url: String::new(),
        }
    }

    #[test]
    fn test_options_marked_correct() {
        let doc = OutputDocument::new(vec![Ticket {
            number: 1,
            questions: vec![question(1, 1)],
        }]);

        let batch = prepare_import(&doc);
        assert!(batch.is_clean());
        let options = &batch.tickets[0].questions[0].options;
        let flags: Vec<bool> = options.iter().map(|o| o.is_correct).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(options[1].text, "B");
        assert_eq!(batch.tickets[0].questions[0].image_url, "https://example.com/1.png");
    }

    #[test]
    fn test_invalid_answer_rejects_whole_ticket() {
        let doc = OutputDocument::new(vec![
            Ticket {
                number: 1,
                questions: vec![question(1, 0)],
            },
            Ticket {
                number: 2,
                questions: vec![question(1, 0), question(2, 3)],
            },
            Ticket {
                number: 3,
                questions: vec![question(1, -1)],
            },
        ]);

        let batch = prepare_import(&doc);
        assert_eq!(batch.tickets.len(), 1);
        assert_eq!(batch.tickets[0].number, 1);
        assert_eq!(
            batch.rejected,
            vec![
                RejectedTicket {
                    number: 2,
                    question_position: 2,
                    correct_answer: 3,
                    option_count: 3,
                },
                RejectedTicket {
                    number: 3,
                    question_position: 1,
                    correct_answer: -1,
                    option_count: 3,
                },
            ]
        );
        assert!(batch.rejected[0]
            .to_string()
            .contains("question 2 in ticket 2"));
    }

    #[test]
    fn test_import_question_serialized_shape() {
        let converted = convert_question(&question(5, 2));
        let value = serde_json::to_value(&converted).unwrap();
        assert_eq!(value["questionNumber"], 5);
        assert_eq!(value["videoUrl"], "");
        assert_eq!(value["options"][2]["isCorrect"], true);
        assert!(value.get("correctAnswer").is_none());
    }
}
