//! Settings errors.

use thiserror::Error;

/// Errors raised while reading report settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The payload is not a JSON object.
    #[error("Invalid settings JSON: {0}")]
    Json(String),

    /// A value has the wrong type or is out of range.
    #[error("Invalid value for setting {key}: {reason}")]
    InvalidValue {
        /// Setting key.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
