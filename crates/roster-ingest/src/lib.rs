//! Loading report records from files.
//!
//! - [`csv_table`]: raw CSV reading (header row plus text cells).
//! - [`source`]: the [`RecordSource`] seam and its file-backed sources.
//! - [`error`]: [`FetchError`] with user-facing messages.

pub mod csv_table;
pub mod error;
pub mod source;

pub use csv_table::{CsvTable, parse_csv, read_csv_table};
pub use error::{FetchError, Result};
pub use source::{
    CsvFileSource, DataLocation, FetchRequest, JsonFileSource, RecordSource, load_records_file,
    parse_json_records,
};
