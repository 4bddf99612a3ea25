//! Upstream filter dimensions (date range, location).
//!
//! Changing the scope replaces the record set a view works on, so views reset
//! their transient selections whenever it changes.

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, RosterError};

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(RosterError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The calendar month containing `day`.
    pub fn month_of(day: NaiveDate) -> Self {
        let start = day.with_day0(0).unwrap_or(day);
        let end = start
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(start);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordScope {
    pub date_range: Option<DateRange>,
    /// Location name, compared case-insensitively.
    pub location: Option<String>,
}

impl RecordScope {
    pub fn is_unrestricted(&self) -> bool {
        self.date_range.is_none() && self.location.is_none()
    }

    #[must_use]
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        let trimmed = location.trim();
        self.location = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Human-readable lines describing the active scope, used as export
    /// metadata.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(range) = &self.date_range {
            lines.push(format!("Date range: {range}"));
        }
        if let Some(location) = &self.location {
            lines.push(format!("Location: {location}"));
        }
        lines
    }
}
