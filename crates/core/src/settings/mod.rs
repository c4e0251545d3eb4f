//! Report settings.
//!
//! Settings persist as a flat JSON object. Keys, defaults and validation
//! live in one declarative table, [`SETTINGS_SCHEMA`].

pub mod error;
pub mod schema;
pub mod types;

pub use error::SettingsError;
pub use schema::{SETTINGS_SCHEMA, SETTINGS_VERSION, SettingDescriptor, SettingValue, descriptor};
pub use types::ReportSettings;
