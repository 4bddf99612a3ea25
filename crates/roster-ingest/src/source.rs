//! Record sources.
//!
//! A [`RecordSource`] answers "give me the records for report X". The file
//! sources here stand in for the backend: a directory holds one
//! `<report-key>.json` or `<report-key>.csv` per report.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use roster_model::Record;

use crate::csv_table::read_csv_table;
use crate::error::{FetchError, Result};

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub report: String,
}

impl FetchRequest {
    pub fn new(report: impl Into<String>) -> Self {
        Self {
            report: report.into(),
        }
    }
}

pub trait RecordSource {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<Record>>;
}

/// Accepted JSON shapes: a bare array or the API envelope `{"data": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPayload {
    Rows(Vec<Record>),
    Envelope { data: Vec<Record> },
}

impl JsonPayload {
    fn into_records(self) -> Vec<Record> {
        match self {
            JsonPayload::Rows(rows) | JsonPayload::Envelope { data: rows } => rows,
        }
    }
}

pub fn parse_json_records(text: &str) -> serde_json::Result<Vec<Record>> {
    serde_json::from_str::<JsonPayload>(text).map(JsonPayload::into_records)
}

/// Load records from a single `.json` or `.csv` file.
pub fn load_records_file(path: &Path) -> Result<Vec<Record>> {
    let extension = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_ascii_lowercase);
    let records = match extension.as_deref() {
        Some("json") => {
            let text = std::fs::read_to_string(path).map_err(|source| FetchError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            parse_json_records(&text).map_err(|source| FetchError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        Some("csv") => read_csv_table(path)
            .map_err(|source| FetchError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .into_records(),
        _ => {
            return Err(FetchError::UnsupportedFile {
                path: path.to_path_buf(),
            });
        }
    };
    info!(path = %path.display(), count = records.len(), "records loaded");
    Ok(records)
}

/// Directory of `<report-key>.json` files.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<Record>> {
        fetch_with_extension(&self.dir, request, "json")
    }
}

/// Directory of `<report-key>.csv` files. Every cell loads as text.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    dir: PathBuf,
}

impl CsvFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl RecordSource for CsvFileSource {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<Record>> {
        fetch_with_extension(&self.dir, request, "csv")
    }
}

/// A data location given on the command line: either one records file used
/// for any report, or a directory searched for `<report-key>.json` then
/// `<report-key>.csv`.
#[derive(Debug, Clone)]
pub struct DataLocation {
    path: PathBuf,
}

impl DataLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for DataLocation {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<Record>> {
        if self.path.is_file() {
            return load_records_file(&self.path);
        }
        let json = self.path.join(format!("{}.json", request.report));
        if json.is_file() {
            return load_records_file(&json);
        }
        CsvFileSource::new(&self.path).fetch(request)
    }
}

fn fetch_with_extension(dir: &Path, request: &FetchRequest, extension: &str) -> Result<Vec<Record>> {
    let path = dir.join(format!("{}.{extension}", request.report));
    debug!(report = %request.report, path = %path.display(), "fetching records");
    if !path.is_file() {
        return Err(FetchError::SourceNotFound {
            report: request.report.clone(),
            path: dir.to_path_buf(),
        });
    }
    load_records_file(&path)
}
