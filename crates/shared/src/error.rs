//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An input document or settings payload could not be read.
    #[error("Invalid input: {0}")]
    Input(String),

    /// The host environment does not meet the report's preconditions.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The run was cancelled before producing a report.
    #[error("Cancelled: {0}")]
    Cancelled(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 78,
            Self::Input(_) => 65,
            Self::Precondition(_) => 69,
            Self::Cancelled(_) => 1,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the stable error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Input(_) => "INVALID_INPUT",
            Self::Precondition(_) => "PRECONDITION_FAILED",
            Self::Cancelled(_) => "CANCELLED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
