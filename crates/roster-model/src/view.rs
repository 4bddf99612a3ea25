//! Transient view selections: search query, sort, and page.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Case-insensitive substring query.
///
/// Stored trimmed and lower-cased; a blank query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(input: &str) -> Self {
        Self {
            needle: input.trim().to_lowercase(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// `haystack` must already be lower-cased.
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.contains(self.needle.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Header-click behavior: the active field flips direction, any other
    /// field starts ascending.
    pub fn toggled(current: Option<&SortSpec>, field: &str) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec {
                field: spec.field.clone(),
                direction: spec.direction.flipped(),
            },
            _ => SortSpec::asc(field),
        }
    }
}

/// A 1-based page of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    index: usize,
    size: usize,
}

impl Page {
    pub const DEFAULT_SIZE: usize = 10;

    pub fn new(index: usize, size: usize) -> Result<Self> {
        if index == 0 || size == 0 {
            return Err(RosterError::InvalidPage { index, size });
        }
        Ok(Self { index, size })
    }

    /// Page 1 with the given size (a zero size is raised to 1).
    pub fn first(size: usize) -> Self {
        Self {
            index: 1,
            size: size.max(1),
        }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn size(self) -> usize {
        self.size
    }

    /// Offset of the first item on this page.
    pub fn offset(self) -> usize {
        (self.index - 1).saturating_mul(self.size)
    }

    #[must_use]
    pub fn with_index(self, index: usize) -> Self {
        Self {
            index: index.max(1),
            size: self.size,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(Self::DEFAULT_SIZE)
    }
}
