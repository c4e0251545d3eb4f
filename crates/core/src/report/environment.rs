//! Host application preconditions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::error::ReportError;

/// Oldest host version the report runs on.
pub const MIN_APPLICATION_VERSION: &str = "10.0.1";

/// License plans that include the report.
pub const ACCEPTED_LICENSES: [&str; 2] = ["professional", "advanced"];

/// What the host application reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEnvironment {
    /// Dotted version string (e.g. "10.0.12").
    pub application_version: String,
    /// License plan, `None` when the host reports none.
    pub license: Option<String>,
}

impl HostEnvironment {
    /// Creates a host description.
    pub fn new(application_version: impl Into<String>, license: Option<String>) -> Self {
        Self {
            application_version: application_version.into(),
            license,
        }
    }

    /// Checks the version and license preconditions.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::VersionUnsupported` for a host older than
    /// [`MIN_APPLICATION_VERSION`] and `ReportError::LicenseInsufficient` for a
    /// missing or lesser license.
    pub fn check(&self) -> Result<(), ReportError> {
        if compare_versions(&self.application_version, MIN_APPLICATION_VERSION) == Ordering::Less {
            return Err(ReportError::VersionUnsupported {
                found: self.application_version.clone(),
                required: MIN_APPLICATION_VERSION,
            });
        }

        let licensed = self.license.as_deref().is_some_and(|license| {
            ACCEPTED_LICENSES
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(license.trim()))
        });
        if !licensed {
            return Err(ReportError::LicenseInsufficient(self.license.clone()));
        }

        Ok(())
    }
}

/// Compares dotted version strings numerically, segment by segment.
///
/// Missing segments count as zero and each segment is read up to its first
/// non-digit, so "10.1" == "10.1.0" and "10.0.1-beta" == "10.0.1".
#[must_use]
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let left = segments(left);
    let right = segments(right);
    let len = left.len().max(right.len());
    (0..len)
        .map(|i| {
            let a = left.get(i).copied().unwrap_or(0);
            let b = right.get(i).copied().unwrap_or(0);
            a.cmp(&b)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn segments(version: &str) -> Vec<u64> {
    version
        .trim()
        .split('.')
        .map(|segment| {
            let digits: String = segment.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        })
        .collect()
}
