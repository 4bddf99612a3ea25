use serde::{Deserialize, Serialize};

use crate::field::{ColumnSpec, FieldKind, FieldRef};
use crate::view::SortSpec;

/// Per-report field list consumed by the generic pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLayout {
    /// Stable identifier, e.g. `attendance`.
    pub key: String,
    pub title: String,
    pub columns: Vec<ColumnSpec>,
    /// Fields the search query is matched against.
    pub search_fields: Vec<FieldRef>,
    /// Field checked against the scope's date range.
    #[serde(default)]
    pub date_field: Option<FieldRef>,
    /// Field checked against the scope's location.
    #[serde(default)]
    pub location_field: Option<FieldRef>,
    #[serde(default)]
    pub default_sort: Option<SortSpec>,
}

impl ReportLayout {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            columns: Vec::new(),
            search_fields: Vec::new(),
            date_field: None,
            location_field: None,
            default_sort: None,
        }
    }

    #[must_use]
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn search(mut self, field: FieldRef) -> Self {
        self.search_fields.push(field);
        self
    }

    #[must_use]
    pub fn dated_by(mut self, field: FieldRef) -> Self {
        self.date_field = Some(field);
        self
    }

    #[must_use]
    pub fn located_by(mut self, field: FieldRef) -> Self {
        self.location_field = Some(field);
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, sort: SortSpec) -> Self {
        self.default_sort = Some(sort);
        self
    }

    /// Every field the layout knows about, columns first.
    pub fn fields(&self) -> Vec<FieldRef> {
        let mut fields: Vec<FieldRef> = self.columns.iter().map(|c| c.field.clone()).collect();
        let extra = self
            .search_fields
            .iter()
            .chain(self.date_field.iter())
            .chain(self.location_field.iter());
        for field in extra {
            if !fields.iter().any(|known| known.path == field.path) {
                fields.push(field.clone());
            }
        }
        fields
    }

    /// Kind of `path`, falling back to text for unknown fields.
    pub fn kind_of(&self, path: &str) -> FieldKind {
        FieldKind::declared_for(&self.fields(), path)
    }

    /// Resolve a user-supplied sort key: a field path or a column header,
    /// both matched case-insensitively.
    pub fn sort_field(&self, name: &str) -> Option<String> {
        let name = name.trim();
        self.columns
            .iter()
            .find(|c| c.field.path.eq_ignore_ascii_case(name) || c.header.eq_ignore_ascii_case(name))
            .map(|c| c.field.path.clone())
    }
}
