//! Roster report export.
//!
//! - **CSV**: header row plus one row of display values per record
//! - **Printable document**: titled, paginated XHTML table with striped rows
//!
//! Both are pure functions over in-memory records. Declining to export an
//! empty result is the caller's job; an empty input here still yields a
//! valid artifact.

mod csv_export;
mod document;
mod error;
mod exporter;

pub use csv_export::to_csv;
pub use document::{DocumentOptions, NO_DATA_TEXT, XHTML_NS, to_document};
pub use error::{ExportError, Result};
pub use exporter::{
    CsvExporter, DocumentExporter, ExportFormat, ExportRequest, Exporter, exporter_for,
};
