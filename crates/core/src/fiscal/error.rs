//! Period resolution errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while resolving a reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// End date is not after the start date.
    #[error("Invalid date range: end {end} is not after start {start}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}
