//! Field normalization.
//!
//! Reduces a (possibly nested) record field to a directly comparable value,
//! and separately to the display string shown in tables and exports.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use roster_model::{ColumnSpec, FieldKind, FieldRef, FieldValue, Record};

use crate::format::{DisplayFormatter, plain_number};

/// Comparable form of a field.
///
/// Ordering is total: `Text < Number < Timestamp` across variants, natural
/// order within a variant.
#[derive(Debug, Clone)]
pub enum ComparableValue {
    /// Lower-cased text.
    Text(String),
    Number(f64),
    /// Milliseconds since the Unix epoch (UTC).
    Timestamp(i64),
}

impl ComparableValue {
    fn rank(&self) -> u8 {
        match self {
            ComparableValue::Text(_) => 0,
            ComparableValue::Number(_) => 1,
            ComparableValue::Timestamp(_) => 2,
        }
    }

    pub fn empty() -> Self {
        ComparableValue::Text(String::new())
    }
}

impl Ord for ComparableValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ComparableValue::Text(a), ComparableValue::Text(b)) => a.cmp(b),
            (ComparableValue::Number(a), ComparableValue::Number(b)) => a.total_cmp(b),
            (ComparableValue::Timestamp(a), ComparableValue::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for ComparableValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ComparableValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ComparableValue {}

/// Comparable value of `field` in `record`.
///
/// Missing paths never fail: text and date fields yield the empty string,
/// numeric fields yield zero.
pub fn normalize(record: &Record, field: &FieldRef) -> ComparableValue {
    let value = record.resolve(&field.path);
    match field.kind {
        FieldKind::Text => ComparableValue::Text(
            value
                .map(|v| plain_text(v).to_lowercase())
                .unwrap_or_default(),
        ),
        FieldKind::Number | FieldKind::Currency => {
            ComparableValue::Number(value.and_then(FieldValue::as_f64).unwrap_or(0.0))
        }
        FieldKind::Date => value
            .and_then(parse_datetime)
            .map(|dt| ComparableValue::Timestamp(dt.timestamp_millis()))
            .unwrap_or_else(ComparableValue::empty),
    }
}

/// Display string of a raw value for the given kind, or `None` when missing.
fn display_text(
    value: &FieldValue,
    kind: FieldKind,
    formatter: &dyn DisplayFormatter,
) -> Option<String> {
    if value.is_missing() {
        return None;
    }
    match (kind, value) {
        (FieldKind::Date, _) => Some(
            parse_datetime(value)
                .map(|dt| formatter.format_date(dt.naive_local()))
                .unwrap_or_else(|| plain_text(value)),
        ),
        (FieldKind::Currency, _) => Some(
            value
                .as_f64()
                .map(|n| formatter.format_currency(n))
                .unwrap_or_else(|| plain_text(value)),
        ),
        (_, FieldValue::Number(n)) => Some(formatter.format_number(*n)),
        (_, FieldValue::Bool(flag)) => Some(if *flag { "Yes" } else { "No" }.to_string()),
        (_, FieldValue::List(items)) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| display_text(item, kind, formatter))
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        // Objects have no flat display; columns point at a leaf path instead.
        (_, FieldValue::Object(_)) => None,
        _ => Some(plain_text(value)),
    }
}

/// Display value for a column: formatted through `formatter`, original case
/// preserved, the column fallback (or `""`) substituted when missing.
pub fn display_value(
    record: &Record,
    column: &ColumnSpec,
    formatter: &dyn DisplayFormatter,
) -> String {
    record
        .resolve(&column.field.path)
        .and_then(|value| display_text(value, column.field.kind, formatter))
        .or_else(|| column.fallback.clone())
        .unwrap_or_default()
}

/// Lower-cased display text the search query is matched against.
pub fn search_text(record: &Record, field: &FieldRef, formatter: &dyn DisplayFormatter) -> String {
    record
        .resolve(&field.path)
        .and_then(|value| display_text(value, field.kind, formatter))
        .map(|text| text.to_lowercase())
        .unwrap_or_default()
}

/// Interpret a value as a point in time.
///
/// Accepts RFC 3339, `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.fff]]`,
/// `YYYY-MM-DD HH:MM[:SS]`, and epoch milliseconds (number or digit string).
/// An explicit offset is kept, so `naive_local()` is the record's own
/// wall-clock time; inputs without one are read as UTC.
pub fn parse_datetime(value: &FieldValue) -> Option<DateTime<FixedOffset>> {
    match value {
        FieldValue::Number(ms) if ms.is_finite() => from_epoch_millis(*ms as i64),
        FieldValue::Text(text) => parse_datetime_str(text),
        _ => None,
    }
}

fn parse_datetime_str(value: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) && trimmed.len() > 8 {
        return trimmed.parse::<i64>().ok().and_then(from_epoch_millis);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt);
    }
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

fn from_epoch_millis(ms: i64) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.fixed_offset())
}

/// Unformatted text of a value; used for text comparison.
fn plain_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Null | FieldValue::Object(_) => String::new(),
        FieldValue::Bool(flag) => flag.to_string(),
        FieldValue::Number(n) => plain_number(*n),
        FieldValue::Text(text) => text.clone(),
        FieldValue::List(items) => items
            .iter()
            .map(plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
    }
}
