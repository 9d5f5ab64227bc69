//! Flat input records and the column layout they are read with.

mod columns;
mod types;

pub use columns::ColumnMap;
pub use types::{Field, FlatRecord};
