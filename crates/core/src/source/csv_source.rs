//! CSV record source.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use super::error::SourceError;
use super::traits::RecordSource;
use crate::config::{delimiter_byte, Config};
use crate::record::{ColumnMap, Field, FlatRecord};

/// Reads question rows from a UTF-8 CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    columns: ColumnMap,
    delimiter: u8,
}

impl CsvSource {
    /// Create a source for `path` using the given header labels.
    pub fn new(path: impl Into<PathBuf>, columns: ColumnMap) -> Self {
        Self {
            path: path.into(),
            columns,
            delimiter: b',',
        }
    }

    /// Create a source from the `[input]` and `[columns]` sections.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.input.path.clone(), config.columns.clone())
            .with_delimiter(delimiter_byte(config))
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse records from any reader. Used by [`RecordSource::read_records`]
    /// and directly in tests.
    pub fn parse<R: Read>(&self, reader: R) -> Result<Vec<FlatRecord>, SourceError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::None)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(SourceError::Header)?.clone();
        let layout = self.resolve_layout(&headers)?;

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row = idx + 1;
            let raw = result.map_err(|source| SourceError::Csv { row, source })?;

            let mut record = FlatRecord::new(row);
            for (field, position) in &layout {
                if let Some(value) = position.and_then(|p| raw.get(p)) {
                    record.set(*field, value);
                }
            }
            records.push(record);
        }

        debug!(rows = records.len(), "Parsed CSV rows");
        Ok(records)
    }

    /// Locate every configured column in the header row.
    ///
    /// Missing required columns are fatal; missing optional ones yield `None`
    /// and read as empty strings. With duplicate labels the last one wins.
    fn resolve_layout(
        &self,
        headers: &StringRecord,
    ) -> Result<Vec<(Field, Option<usize>)>, SourceError> {
        self.columns
            .iter()
            .map(|(field, label)| {
                let position = headers
                    .iter()
                    .enumerate()
                    .filter(|(_, header)| *header == label)
                    .map(|(idx, _)| idx)
                    .last();

                match position {
                    Some(idx) => Ok((field, Some(idx))),
                    None if field.is_required() => Err(SourceError::schema_mismatch(field, label)),
                    None => {
                        warn!(field = %field, label = ?label, "Optional column not in header, using empty values");
                        Ok((field, None))
                    }
                }
            })
            .collect()
    }
}

impl RecordSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn read_records(&self) -> Result<Vec<FlatRecord>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::MissingInput {
            path: self.path.clone(),
            source,
        })?;
        self.parse(file)
    }
}
