use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::record::ColumnMap;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Header label of each input column
    #[serde(default)]
    pub columns: ColumnMap,
}

/// Input sheet configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
    /// Field delimiter, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("tickets.csv")
}

fn default_delimiter() -> char {
    ','
}

/// Output document configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Indentation width in spaces
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            indent: default_indent(),
            format: OutputFormat::default(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("tickets.json")
}

fn default_indent() -> usize {
    2
}

/// Shape of the written document
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Tickets with plain option strings and a `correctAnswer` index
    #[default]
    Plain,
    /// Import shape: options carry an `isCorrect` flag, invalid tickets are dropped
    Import,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => f.write_str("plain"),
            OutputFormat::Import => f.write_str("import"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "import" => Ok(OutputFormat::Import),
            other => Err(format!(
                "unknown output format '{}', expected 'plain' or 'import'",
                other
            )),
        }
    }
}
