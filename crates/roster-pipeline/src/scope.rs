//! Upstream scope filtering (date range and location).

use tracing::{debug, warn};

use roster_model::{FieldValue, Record, RecordScope, ReportLayout};

use crate::normalize::parse_datetime;

/// Restrict `records` to the scope's date range and location.
///
/// A dimension the layout does not declare a field for is ignored. Records
/// whose date cannot be read fall outside any date range.
pub fn apply_scope<'a>(
    records: &'a [Record],
    scope: &RecordScope,
    layout: &ReportLayout,
) -> Vec<&'a Record> {
    if scope.is_unrestricted() {
        return records.iter().collect();
    }
    let date_filter = match (&scope.date_range, &layout.date_field) {
        (Some(range), Some(field)) => Some((range, field)),
        (Some(_), None) => {
            debug!(report = %layout.key, "report has no date field; date range ignored");
            None
        }
        _ => None,
    };
    let location_filter = match (&scope.location, &layout.location_field) {
        (Some(location), Some(field)) => Some((location.to_lowercase(), field)),
        (Some(_), None) => {
            debug!(report = %layout.key, "report has no location field; location ignored");
            None
        }
        _ => None,
    };

    let mut undated = 0usize;
    let kept: Vec<&Record> = records
        .iter()
        .filter(|record| {
            if let Some((range, field)) = date_filter {
                match record.resolve(&field.path).and_then(parse_datetime) {
                    Some(at) if range.contains(at.date_naive()) => {}
                    Some(_) => return false,
                    None => {
                        undated += 1;
                        return false;
                    }
                }
            }
            if let Some((location, field)) = &location_filter {
                let value = record
                    .resolve(&field.path)
                    .and_then(FieldValue::as_str)
                    .map(|text| text.trim().to_lowercase());
                if value.as_deref() != Some(location.as_str()) {
                    return false;
                }
            }
            true
        })
        .collect();
    if undated > 0 {
        warn!(report = %layout.key, undated, "records without a readable date excluded by date range");
    }
    debug!(report = %layout.key, total = records.len(), kept = kept.len(), "scope applied");
    kept
}
