//! Ticket assembly: grouping flat question rows into numbered tickets.

mod assembler;
mod error;
mod import;
mod types;

pub use assembler::assemble;
pub use error::AssembleError;
pub use import::{
    prepare_import, ImportBatch, ImportOption, ImportQuestion, ImportTicket, RejectedTicket,
};
pub use types::{OutputDocument, Question, Ticket};
