//! Error types for record loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching records for a report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No source file exists for the requested report.
    #[error("no records source for report '{report}' in {path}")]
    SourceNotFound { report: String, path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON is malformed or not a list of objects.
    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV is malformed.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File type the sources do not understand.
    #[error("unsupported records file {path}: expected .json or .csv")]
    UnsupportedFile { path: PathBuf },
}

impl FetchError {
    /// Short message suitable for showing to an end user, without paths or
    /// parser internals.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::SourceNotFound { report, .. } => {
                format!("No data is available for the {report} report.")
            }
            FetchError::FileRead { .. } => {
                "The records could not be read. Please try again.".to_string()
            }
            FetchError::Json { .. } | FetchError::Csv { .. } => {
                "The records could not be understood. Please check the data source.".to_string()
            }
            FetchError::UnsupportedFile { .. } => {
                "The selected file type is not supported.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
