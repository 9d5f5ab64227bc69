pub mod config;
pub mod convert;
pub mod record;
pub mod sink;
pub mod source;
pub mod testing;
pub mod ticket;

pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, Config,
    ConfigError, OutputFormat,
};
pub use convert::{check, run_conversion, CheckReport, ConversionSummary, ConvertError};
pub use record::{ColumnMap, Field, FlatRecord};
pub use sink::{DocumentSink, JsonSink, SinkError, SinkReceipt};
pub use source::{CsvSource, RecordSource, SourceError};
pub use ticket::{
    assemble, prepare_import, AssembleError, ImportBatch, OutputDocument, Question,
    RejectedTicket, Ticket,
};
