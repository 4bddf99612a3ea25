//! The "nothing to export" guard that sits in front of every exporter.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use roster_report::{ExportRequest, Exporter};

/// Notice shown instead of writing an empty export.
pub const NOTHING_TO_EXPORT: &str = "No records to export";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Encoded artifact, ready to write.
    Written(Vec<u8>),
    /// The exporter was not called.
    Declined { notice: &'static str },
}

/// Run `exporter` unless the request has no records.
///
/// # Errors
///
/// Only encoder failures from the exporter itself.
pub fn export_guarded(
    exporter: &dyn Exporter,
    request: &ExportRequest<'_>,
) -> roster_report::Result<ExportOutcome> {
    if request.records.is_empty() {
        warn!(format = exporter.format().label(), "{NOTHING_TO_EXPORT}");
        return Ok(ExportOutcome::Declined {
            notice: NOTHING_TO_EXPORT,
        });
    }
    let bytes = exporter.export(request)?;
    info!(
        format = exporter.format().label(),
        records = request.records.len(),
        "export encoded"
    );
    Ok(ExportOutcome::Written(bytes))
}

/// `<dir>/<report>.<ext>`, with `dir` defaulting to the working directory.
pub fn default_output_path(dir: Option<&Path>, report: &str, exporter: &dyn Exporter) -> PathBuf {
    let file_name = format!("{report}.{}", exporter.file_extension());
    match dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
