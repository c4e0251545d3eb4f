//! Report error types.

use chrono::NaiveDate;
use syscohada_shared::AppError;
use thiserror::Error;

use crate::fiscal::PeriodError;
use crate::settings::SettingsError;
use crate::statement::DefinitionError;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: end {end} is not after start {start}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// The host application is older than the minimum supported version.
    #[error("Application version {found} is not supported, {required} or later is required")]
    VersionUnsupported {
        /// Version reported by the host.
        found: String,
        /// Minimum version.
        required: &'static str,
    },

    /// The host license does not include this report.
    #[error("License {} does not include this report", .0.as_deref().unwrap_or("none"))]
    LicenseInsufficient(Option<String>),

    /// Settings could not be read.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The statement table is malformed.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

impl ReportError {
    /// Returns true for host preconditions, which cancel a run instead of
    /// failing it.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::VersionUnsupported { .. } | Self::LicenseInsufficient(_))
    }
}

impl From<PeriodError> for ReportError {
    fn from(err: PeriodError) -> Self {
        match err {
            PeriodError::InvalidDateRange { start, end } => Self::InvalidDateRange { start, end },
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::VersionUnsupported { .. } | ReportError::LicenseInsufficient(_) => {
                Self::Precondition(err.to_string())
            }
            ReportError::Definition(_) => Self::Internal(err.to_string()),
            ReportError::InvalidDateRange { .. } | ReportError::Settings(_) => {
                Self::Input(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_errors_convert() {
        let err: ReportError = PeriodError::InvalidDateRange {
            start: date(2024, 6, 30),
            end: date(2024, 4, 1),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid date range: end 2024-04-01 is not after start 2024-06-30"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let precondition = AppError::from(ReportError::LicenseInsufficient(Some("free".to_string())));
        assert_eq!(precondition.exit_code(), 69);

        let input = AppError::from(ReportError::Settings(SettingsError::Json("eof".to_string())));
        assert_eq!(input.error_code(), "INVALID_INPUT");

        let internal = AppError::from(ReportError::Definition(DefinitionError::DuplicateLine("ZA")));
        assert_eq!(internal.exit_code(), 70);
    }
}
