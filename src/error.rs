//! Error types for the statistics engine

use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced to the caller.
///
/// Empty data is never an error: aggregations return empty series instead.
/// Unknown exercise ids are labelled rather than rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("invalid date range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("custom period needs both a start and an end date")]
    MissingCustomDates,

    #[error("at most {max} exercises can be compared, got {got}")]
    TooManyExercises { max: usize, got: usize },

    #[error("a {weeks}-week calendar ending at {today} leaves the supported date range")]
    CalendarOutOfRange { today: NaiveDate, weeks: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
