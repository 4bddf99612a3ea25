//! Field references and column definitions used by report layouts.

use serde::{Deserialize, Serialize};

/// How a field is compared and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Compared lower-cased.
    #[default]
    Text,
    /// Compared numerically, missing values count as zero.
    Number,
    /// Numeric comparison, currency display.
    Currency,
    /// Compared by timestamp, displayed through the date formatter.
    Date,
}

impl FieldKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldKind::Number | FieldKind::Currency)
    }

    /// Kind declared for `path` in `fields`; text when the path is unknown.
    pub fn declared_for(fields: &[FieldRef], path: &str) -> FieldKind {
        fields
            .iter()
            .find(|field| field.path == path)
            .map(|field| field.kind)
            .unwrap_or_default()
    }
}

/// A (possibly dotted) path into a record together with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    pub path: String,
    #[serde(default)]
    pub kind: FieldKind,
}

impl FieldRef {
    pub fn new(path: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn text(path: impl Into<String>) -> Self {
        Self::new(path, FieldKind::Text)
    }

    pub fn number(path: impl Into<String>) -> Self {
        Self::new(path, FieldKind::Number)
    }

    pub fn currency(path: impl Into<String>) -> Self {
        Self::new(path, FieldKind::Currency)
    }

    pub fn date(path: impl Into<String>) -> Self {
        Self::new(path, FieldKind::Date)
    }
}

/// One displayed/exported column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Display name used in table headers and export header rows.
    pub header: String,
    pub field: FieldRef,
    /// Shown when the field is missing from a record.
    #[serde(default)]
    pub fallback: Option<String>,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>, field: FieldRef) -> Self {
        Self {
            header: header.into(),
            field,
            fallback: None,
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}
