//! Display formatting for dates, numbers, and currency.
//!
//! Formatting only produces strings for rendering and export; comparisons
//! never go through a formatter.

use chrono::NaiveDateTime;

pub trait DisplayFormatter {
    fn format_date(&self, value: NaiveDateTime) -> String;
    fn format_number(&self, value: f64) -> String;
    fn format_currency(&self, value: f64) -> String;
}

/// Formatter driven by display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardFormatter {
    /// `chrono` strftime pattern.
    pub date_format: String,
    pub currency_prefix: String,
    pub decimals: usize,
}

impl Default for StandardFormatter {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            currency_prefix: String::new(),
            decimals: 2,
        }
    }
}

impl StandardFormatter {
    #[must_use]
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_currency_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.currency_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}

impl DisplayFormatter for StandardFormatter {
    fn format_date(&self, value: NaiveDateTime) -> String {
        use std::fmt::Write;

        // An invalid user pattern makes `Display` fail; fall back to ISO.
        let mut out = String::new();
        if write!(out, "{}", value.format(&self.date_format)).is_err() {
            return value.format("%Y-%m-%d").to_string();
        }
        out
    }

    fn format_number(&self, value: f64) -> String {
        if value.is_finite() && value.fract() == 0.0 {
            format!("{value:.0}")
        } else {
            format!("{value:.prec$}", prec = self.decimals)
        }
    }

    fn format_currency(&self, value: f64) -> String {
        format!(
            "{}{value:.prec$}",
            self.currency_prefix,
            prec = self.decimals
        )
    }
}

/// Plain rendering of a number without a formatter: whole numbers drop the
/// fractional part.
pub(crate) fn plain_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
