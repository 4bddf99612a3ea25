use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use roster_model::{FieldValue, Record};

/// Raw CSV contents: first row as headers, remaining rows as text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// One text record per row keyed by header. Short rows are padded with
    /// empty cells; extra cells are dropped.
    pub fn into_records(self) -> Vec<Record> {
        let headers = self.headers;
        self.rows
            .into_iter()
            .map(|row| {
                let mut cells = row.into_iter();
                Record::from_pairs(headers.iter().map(|header| {
                    let value = cells.next().unwrap_or_default();
                    (header.clone(), FieldValue::Text(value))
                }))
            })
            .collect()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn read_table<R: Read>(reader: R) -> csv::Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();
    let headers = match records.next() {
        Some(first) => first?.iter().map(normalize_header).collect(),
        None => Vec::new(),
    };
    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(CsvTable { headers, rows })
}

/// Parse CSV text. Cell values are kept exactly as quoted in the input; only
/// header names are trimmed and whitespace-collapsed.
pub fn parse_csv(text: &str) -> csv::Result<CsvTable> {
    read_table(text.as_bytes())
}

pub fn read_csv_table(path: &Path) -> csv::Result<CsvTable> {
    let file = std::fs::File::open(path)?;
    read_table(std::io::BufReader::new(file))
}
