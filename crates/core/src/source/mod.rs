//! Record sources: where flat question rows come from.

mod csv_source;
mod error;
mod traits;

pub use csv_source::CsvSource;
pub use error::SourceError;
pub use traits::RecordSource;
