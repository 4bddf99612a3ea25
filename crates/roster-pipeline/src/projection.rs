//! Display projection: raw record to the flat row of strings a report shows.

use roster_model::{ColumnSpec, Record};

use crate::format::DisplayFormatter;
use crate::normalize::display_value;

pub fn headers(columns: &[ColumnSpec]) -> Vec<String> {
    columns.iter().map(|column| column.header.clone()).collect()
}

pub fn project_row(
    record: &Record,
    columns: &[ColumnSpec],
    formatter: &dyn DisplayFormatter,
) -> Vec<String> {
    columns
        .iter()
        .map(|column| display_value(record, column, formatter))
        .collect()
}

pub fn project_rows(
    records: &[&Record],
    columns: &[ColumnSpec],
    formatter: &dyn DisplayFormatter,
) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| project_row(record, columns, formatter))
        .collect()
}
