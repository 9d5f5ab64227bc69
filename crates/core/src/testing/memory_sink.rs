//! In-memory document sink for testing.

use std::cell::RefCell;
use std::io;

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::sink::{DocumentSink, SinkError, SinkReceipt};

/// Sink that records every written document as a JSON value.
///
/// Provides controllable behavior for testing:
/// - Track written documents for assertions
/// - Simulate write failures
#[derive(Debug, Default)]
pub struct MemorySink {
    written: RefCell<Vec<Value>>,
    fail: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every write fails with an I/O error.
    pub fn failing() -> Self {
        Self {
            written: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    /// All documents written so far.
    pub fn written(&self) -> Vec<Value> {
        self.written.borrow().clone()
    }

    /// The most recent document, if any.
    pub fn last_written(&self) -> Option<Value> {
        self.written.borrow().last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.written.borrow().len()
    }
}

impl DocumentSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn write<T: Serialize + ?Sized>(&self, document: &T) -> Result<SinkReceipt, SinkError> {
        if self.fail {
            return Err(SinkError::io(
                "memory",
                io::Error::new(io::ErrorKind::Other, "simulated write failure"),
            ));
        }

        let bytes = serde_json::to_vec(document).map_err(SinkError::Serialize)?;
        let value = serde_json::to_value(document).map_err(SinkError::Serialize)?;
        self.written.borrow_mut().push(value);

        Ok(SinkReceipt {
            bytes: bytes.len(),
            sha256: format!("{:x}", Sha256::digest(&bytes)),
        })
    }
}
