//! Groups flat records into tickets.
//!
//! Records are grouped by ticket number, each ticket's questions are stably
//! sorted by question number, and tickets are emitted in ascending order.
//! Rows with a blank ticket number are dropped.

use std::collections::BTreeMap;

use tracing::debug;

use super::error::AssembleError;
use super::types::{OutputDocument, Question, Ticket};
use crate::record::{Field, FlatRecord};

/// Assemble the output document from flat records.
///
/// Input order is irrelevant to the ticket order but decides the order of
/// questions that share a question number.
pub fn assemble(records: &[FlatRecord]) -> Result<OutputDocument, AssembleError> {
    let mut tickets: BTreeMap<i64, Vec<Question>> = BTreeMap::new();

    for record in records {
        if record.is_blank_ticket() {
            debug!(row = record.row(), "Skipping row with blank ticket number");
            continue;
        }

        let number = parse_integer(record, Field::TicketNumber)?;
        let question = build_question(record)?;
        tickets.entry(number).or_default().push(question);
    }

    let tickets: Vec<Ticket> = tickets
        .into_iter()
        .map(|(number, mut questions)| {
            // Vec::sort_by_key is stable
            questions.sort_by_key(|q| q.question_number);
            Ticket { number, questions }
        })
        .collect();

    Ok(OutputDocument::new(tickets))
}

fn build_question(record: &FlatRecord) -> Result<Question, AssembleError> {
    let question_number = parse_integer(record, Field::QuestionNumber)?;
    let options = collect_options(record);
    let correct_answer = parse_integer(record, Field::CorrectAnswer)?.saturating_sub(1);

    Ok(Question {
        text: record.get_owned(Field::Text),
        options,
        correct_answer,
        category: record.get_owned(Field::Category),
        question_number,
        image_url: record.get_owned(Field::ImageUrl),
        hint: record.get_owned(Field::Hint),
        video_url: record.get_owned(Field::VideoUrl),
    })
}

/// The three mandatory options verbatim, plus the fourth when it has content.
fn collect_options(record: &FlatRecord) -> Vec<String> {
    let mut options = vec![
        record.get_owned(Field::Option1),
        record.get_owned(Field::Option2),
        record.get_owned(Field::Option3),
    ];

    let fourth = record.get(Field::Option4);
    if !fourth.trim().is_empty() {
        options.push(fourth.to_string());
    }

    options
}

fn parse_integer(record: &FlatRecord, field: Field) -> Result<i64, AssembleError> {
    let raw = record.get(field);
    raw.trim()
        .parse::<i64>()
        .map_err(|source| AssembleError::InvalidInteger {
            row: record.row(),
            field,
            value: raw.to_string(),
            source,
        })
}
