//! Document sinks: where the assembled document is written.

mod error;
mod json_sink;
mod traits;

pub use error::SinkError;
pub use json_sink::{JsonSink, DEFAULT_INDENT};
pub use traits::{DocumentSink, SinkReceipt};
