//! Pretty-printed JSON file sink.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::error::SinkError;
use super::traits::{DocumentSink, SinkReceipt};
use crate::config::OutputConfig;

/// Default indentation width.
pub const DEFAULT_INDENT: usize = 2;

/// Writes documents as indented UTF-8 JSON.
///
/// Non-ASCII text is written literally and no trailing newline is added.
/// The file is replaced atomically through a sibling temporary file.
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
    indent: usize,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            indent: DEFAULT_INDENT,
        }
    }

    /// Create a sink from the `[output]` section.
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.path.clone()).with_indent(config.indent)
    }

    /// Set indentation width in spaces. Zero keeps line breaks without indent.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize a document to bytes with this sink's formatting.
    pub fn render<T: Serialize + ?Sized>(&self, document: &T) -> Result<Vec<u8>, SinkError> {
        let indent = " ".repeat(self.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document
            .serialize(&mut serializer)
            .map_err(SinkError::Serialize)?;
        Ok(buf)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn persist(&self, bytes: &[u8]) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| SinkError::io(parent, e))?;
            }
        }

        let temp = self.temp_path();
        fs::write(&temp, bytes).map_err(|e| SinkError::io(&temp, e))?;

        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(SinkError::io(&self.path, e));
        }

        Ok(())
    }
}

impl DocumentSink for JsonSink {
    fn name(&self) -> &str {
        "json"
    }

    fn write<T: Serialize + ?Sized>(&self, document: &T) -> Result<SinkReceipt, SinkError> {
        let bytes = self.render(document)?;
        self.persist(&bytes)?;

        let sha256 = format!("{:x}", Sha256::digest(&bytes));
        debug!(path = ?self.path, bytes = bytes.len(), "Wrote JSON document");

        Ok(SinkReceipt {
            bytes: bytes.len(),
            sha256,
        })
    }
}
