//! CSV export.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use roster_model::{ColumnSpec, Record};
use roster_pipeline::{DisplayFormatter, headers, project_row};

use crate::error::Result;

/// Header row of column display names followed by one row of display values
/// per record. Cells containing commas, quotes, or newlines are quoted per
/// RFC 4180; lines end with `\n`.
pub fn to_csv(
    records: &[&Record],
    columns: &[ColumnSpec],
    formatter: &dyn DisplayFormatter,
) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(headers(columns))?;
    for record in records {
        writer.write_record(project_row(record, columns, formatter))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(csv::IntoInnerError::into_error)?;
    info!(rows = records.len(), columns = columns.len(), bytes = bytes.len(), "csv export built");
    Ok(String::from_utf8(bytes)?)
}
