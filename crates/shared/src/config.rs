//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Input documents configuration.
    pub input: InputConfig,
    /// Host environment configuration.
    #[serde(default)]
    pub host: HostConfig,
    /// Report selection.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Input documents configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Current-year ledger document (JSON).
    pub current_document: PathBuf,
    /// Previous-year ledger document (JSON), if any.
    #[serde(default)]
    pub previous_document: Option<PathBuf>,
    /// Saved report settings (JSON), if any.
    #[serde(default)]
    pub settings_file: Option<PathBuf>,
}

/// Host environment the report runs in.
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    /// Host application version (e.g., "10.0.1").
    #[serde(default = "default_application_version")]
    pub application_version: String,
    /// License type (e.g., "professional", "advanced").
    #[serde(default)]
    pub license: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            application_version: default_application_version(),
            license: None,
        }
    }
}

fn default_application_version() -> String {
    "10.0.1".to_string()
}

/// Which statement to produce.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Statement name: "cash_flow" or "profit_loss".
    #[serde(default = "default_statement")]
    pub statement: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            statement: default_statement(),
        }
    }
}

fn default_statement() -> String {
    "cash_flow".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SYSCOHADA").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Reads configuration from TOML text, without files or environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a required key is
    /// missing.
    pub fn from_toml(text: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
