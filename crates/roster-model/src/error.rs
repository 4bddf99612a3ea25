use thiserror::Error;

/// Invalid selections rejected at construction time.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("invalid page: index {index}, size {size} (both must be at least 1)")]
    InvalidPage { index: usize, size: usize },
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

pub type Result<T> = std::result::Result<T, RosterError>;
