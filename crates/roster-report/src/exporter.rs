//! Export formats behind one trait, so callers can pick a format at runtime.

use roster_model::{ColumnSpec, Record};
use roster_pipeline::DisplayFormatter;

use crate::csv_export::to_csv;
use crate::document::{DocumentOptions, to_document};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Document,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Document => "html",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Document => "printable document",
        }
    }
}

/// Everything an exporter needs; `records` is the filtered, unpaginated set.
pub struct ExportRequest<'a> {
    pub title: &'a str,
    pub metadata: &'a [String],
    pub columns: &'a [ColumnSpec],
    pub records: &'a [&'a Record],
    pub formatter: &'a dyn DisplayFormatter,
}

pub trait Exporter {
    fn format(&self) -> ExportFormat;

    fn export(&self, request: &ExportRequest<'_>) -> Result<Vec<u8>>;

    fn file_extension(&self) -> &'static str {
        self.format().extension()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn export(&self, request: &ExportRequest<'_>) -> Result<Vec<u8>> {
        to_csv(request.records, request.columns, request.formatter).map(String::into_bytes)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExporter {
    pub options: DocumentOptions,
}

impl Exporter for DocumentExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Document
    }

    fn export(&self, request: &ExportRequest<'_>) -> Result<Vec<u8>> {
        to_document(
            request.title,
            request.metadata,
            request.columns,
            request.records,
            request.formatter,
            &self.options,
        )
    }
}

pub fn exporter_for(format: ExportFormat, options: DocumentOptions) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Csv => Box::new(CsvExporter),
        ExportFormat::Document => Box::new(DocumentExporter { options }),
    }
}
