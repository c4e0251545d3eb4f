//! Report settings value.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::debug;

use super::error::SettingsError;
use super::schema::SETTINGS_SCHEMA;
use crate::ledger::{DocumentInfo, FiscalWindow};

/// User settings for one report run.
///
/// Constructed once per run from the persisted JSON object and never
/// mutated afterwards; every change produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Print the logo row.
    pub logo: bool,
    /// Name of the logo composition.
    pub logo_name: String,
    /// Print the company header rows.
    pub print_header: bool,
    /// Print the report title.
    pub print_title: bool,
    /// Grouping column group codes are read from.
    pub column: String,
    /// Format amounts without decimals.
    pub decimals: bool,
    /// First day of the selected period.
    pub selection_start: Option<NaiveDate>,
    /// Last day of the selected period.
    pub selection_end: Option<NaiveDate>,
    /// Whether the user narrowed the period.
    pub selection_checked: bool,
    /// Version tag of the persisted settings.
    pub version: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        let empty = Self {
            logo: false,
            logo_name: String::new(),
            print_header: false,
            print_title: false,
            column: String::new(),
            decimals: false,
            selection_start: None,
            selection_end: None,
            selection_checked: false,
            version: String::new(),
        };
        SETTINGS_SCHEMA
            .iter()
            .fold(empty, |settings, descriptor| (descriptor.apply)(settings, (descriptor.default)()))
    }
}

impl ReportSettings {
    /// Reads settings from their persisted JSON object.
    ///
    /// Missing keys take their default; unknown keys are ignored. An empty
    /// payload yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Json` for malformed JSON or a non-object, and
    /// `SettingsError::InvalidValue` when a known key fails validation.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let Value::Object(object) = serde_json::from_str::<Value>(text)? else {
            return Err(SettingsError::Json("settings must be a JSON object".to_string()));
        };

        let mut settings = Self::default();
        for descriptor in &SETTINGS_SCHEMA {
            if let Some(raw) = object.get(descriptor.key) {
                let value = (descriptor.validate)(descriptor.key, raw)?;
                settings = (descriptor.apply)(settings, value);
            }
        }

        debug!(column = %settings.column, version = %settings.version, "Loaded report settings");
        Ok(settings)
    }

    /// Writes settings as a JSON object, tagged with the current version.
    #[must_use]
    pub fn to_json(&self) -> String {
        let object: Map<String, Value> = SETTINGS_SCHEMA
            .iter()
            .map(|descriptor| (descriptor.key.to_string(), (descriptor.read)(self).to_json()))
            .collect();
        Value::Object(object).to_string()
    }

    /// Returns settings with the given period selected.
    #[must_use]
    pub fn with_selection(self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            selection_start: Some(start),
            selection_end: Some(end),
            selection_checked: true,
            ..self
        }
    }

    /// The window to report on: the selection when both dates are set,
    /// otherwise the document's fiscal year.
    #[must_use]
    pub fn window(&self, document: &DocumentInfo) -> FiscalWindow {
        match (self.selection_start, self.selection_end) {
            (Some(start), Some(end)) => FiscalWindow::new(start, end),
            _ => document.fiscal_window(),
        }
    }
}
