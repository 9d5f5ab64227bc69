//! Conversion driver: source → assembler → (import preparation) → sink.
//!
//! Nothing is handed to the sink until every record has been read and
//! assembled, so a failing run never produces output.

use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::OutputFormat;
use crate::record::FlatRecord;
use crate::sink::{DocumentSink, SinkError};
use crate::source::{RecordSource, SourceError};
use crate::ticket::{assemble, prepare_import, AssembleError, OutputDocument, RejectedTicket};

/// Any fatal error of a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Assemble(#[from] AssembleError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Counters reported after a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub format: OutputFormat,
    pub rows_read: usize,
    /// Rows dropped for a blank ticket number
    pub rows_skipped: usize,
    /// Tickets written
    pub tickets: usize,
    /// Questions written
    pub questions: usize,
    /// Tickets left out of an import document
    pub rejected_tickets: usize,
    pub bytes_written: usize,
    pub sha256: String,
}

/// Result of a dry run over the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub tickets: usize,
    pub questions: usize,
    /// Tickets that an import would reject
    pub rejected: Vec<RejectedTicket>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Read, assemble and write the document in the requested format.
pub fn run_conversion<S, K>(
    source: &S,
    sink: &K,
    format: OutputFormat,
) -> Result<ConversionSummary, ConvertError>
where
    S: RecordSource + ?Sized,
    K: DocumentSink,
{
    let (records, document) = read_and_assemble(source)?;
    log_tickets(&document);

    let (receipt, tickets, questions, rejected_tickets) = match format {
        OutputFormat::Plain => {
            let receipt = sink.write(&document)?;
            (receipt, document.len(), document.question_count(), 0)
        }
        OutputFormat::Import => {
            let batch = prepare_import(&document);
            for rejected in &batch.rejected {
                error!(ticket = rejected.number, "{}", rejected);
            }
            let questions: usize = batch.tickets.iter().map(|t| t.questions.len()).sum();
            let receipt = sink.write(&batch.tickets)?;
            (receipt, batch.tickets.len(), questions, batch.rejected.len())
        }
    };

    let summary = ConversionSummary {
        format,
        rows_read: records.len(),
        rows_skipped: count_skipped(&records),
        tickets,
        questions,
        rejected_tickets,
        bytes_written: receipt.bytes,
        sha256: receipt.sha256,
    };

    info!(
        sink = sink.name(),
        format = %summary.format,
        rows = summary.rows_read,
        skipped = summary.rows_skipped,
        tickets = summary.tickets,
        questions = summary.questions,
        rejected = summary.rejected_tickets,
        bytes = summary.bytes_written,
        sha256 = %summary.sha256,
        "Conversion complete"
    );

    Ok(summary)
}

/// Read and assemble without writing, reporting tickets an import would reject.
pub fn check<S>(source: &S) -> Result<CheckReport, ConvertError>
where
    S: RecordSource + ?Sized,
{
    let (records, document) = read_and_assemble(source)?;
    log_tickets(&document);

    let batch = prepare_import(&document);
    for rejected in &batch.rejected {
        error!(ticket = rejected.number, "{}", rejected);
    }

    let report = CheckReport {
        rows_read: records.len(),
        rows_skipped: count_skipped(&records),
        tickets: document.len(),
        questions: document.question_count(),
        rejected: batch.rejected,
    };

    info!(
        rows = report.rows_read,
        skipped = report.rows_skipped,
        tickets = report.tickets,
        questions = report.questions,
        rejected = report.rejected.len(),
        "Check complete"
    );

    Ok(report)
}

fn read_and_assemble<S>(source: &S) -> Result<(Vec<FlatRecord>, OutputDocument), ConvertError>
where
    S: RecordSource + ?Sized,
{
    let records = source.read_records()?;
    debug!(source = source.name(), rows = records.len(), "Read input records");

    let document = assemble(&records)?;
    Ok((records, document))
}

fn count_skipped(records: &[FlatRecord]) -> usize {
    records.iter().filter(|r| r.is_blank_ticket()).count()
}

fn log_tickets(document: &OutputDocument) {
    for ticket in document.tickets() {
        debug!(
            ticket = ticket.number,
            questions = ticket.questions.len(),
            "Assembled ticket"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;
    use crate::testing::fixtures::question_row;
    use crate::testing::{MemorySink, MemorySource};

    #[test]
    fn test_plain_conversion_writes_document() {
        let source = MemorySource::new(vec![
            question_row(1, "2", "1", "1"),
            question_row(2, "1", "1", "2"),
            question_row(3, "", "1", "1"),
        ]);
        let sink = MemorySink::new();

        let summary = run_conversion(&source, &sink, OutputFormat::Plain).unwrap();

        assert_eq!(summary.rows_read, 3);
        assert_eq!(summary.rows_skipped, 1);
        assert_eq!(summary.tickets, 2);
        assert_eq!(summary.questions, 2);
        assert_eq!(summary.rejected_tickets, 0);

        let written = sink.last_written().unwrap();
        assert_eq!(written[0]["number"], 1);
        assert_eq!(written[1]["number"], 2);
        assert_eq!(written[0]["questions"][0]["correctAnswer"], 1);
    }

    #[test]
    fn test_import_conversion_drops_invalid_ticket() {
        let source = MemorySource::new(vec![
            question_row(1, "1", "1", "1"),
            question_row(2, "2", "1", "7"),
        ]);
        let sink = MemorySink::new();

        let summary = run_conversion(&source, &sink, OutputFormat::Import).unwrap();

        assert_eq!(summary.tickets, 1);
        assert_eq!(summary.rejected_tickets, 1);
        let written = sink.last_written().unwrap();
        assert_eq!(written.as_array().unwrap().len(), 1);
        assert_eq!(written[0]["questions"][0]["options"][0]["isCorrect"], true);
    }

    #[test]
    fn test_parse_error_writes_nothing() {
        let source = MemorySource::new(vec![
            question_row(1, "1", "1", "1"),
            question_row(2, "1", "2", "1").with(Field::QuestionNumber, "two"),
        ]);
        let sink = MemorySink::new();

        let err = run_conversion(&source, &sink, OutputFormat::Plain).unwrap_err();

        assert!(matches!(err, ConvertError::Assemble(_)));
        assert_eq!(sink.write_count(), 0);
    }

    #[test]
    fn test_source_error_propagates() {
        let source = MemorySource::failing("Номер билета");
        let sink = MemorySink::new();

        let err = run_conversion(&source, &sink, OutputFormat::Plain).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Source(SourceError::SchemaMismatch { .. })
        ));
        assert_eq!(sink.write_count(), 0);
    }

    #[test]
    fn test_sink_error_propagates() {
        let source = MemorySource::new(vec![question_row(1, "1", "1", "1")]);
        let sink = MemorySink::failing();

        let err = run_conversion(&source, &sink, OutputFormat::Plain).unwrap_err();
        assert!(matches!(err, ConvertError::Sink(_)));
    }

    #[test]
    fn test_check_reports_rejections() {
        let source = MemorySource::new(vec![
            question_row(1, "1", "1", "0"),
            question_row(2, "1", "2", "2"),
            question_row(3, "3", "1", "3"),
        ]);

        let report = check(&source).unwrap();
        assert_eq!(report.tickets, 2);
        assert_eq!(report.questions, 3);
        assert!(!report.is_clean());
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].number, 1);
        assert_eq!(report.rejected[0].question_position, 1);
    }
}
