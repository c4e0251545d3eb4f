//! Declarative table of report settings.
//!
//! Each entry names a key of the persisted JSON object, its default, how a
//! raw value is checked and how it is folded into [`ReportSettings`].

use chrono::NaiveDate;
use serde_json::Value;

use super::error::SettingsError;
use super::types::ReportSettings;

/// Written to the `version` key.
pub const SETTINGS_VERSION: &str = "1.0";

/// A typed setting value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Boolean flag.
    Flag(bool),
    /// Free text.
    Text(String),
    /// Optional date, written as `YYYY-MM-DD` or an empty string.
    Date(Option<NaiveDate>),
}

impl SettingValue {
    /// JSON form of the value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Flag(flag) => Value::Bool(*flag),
            Self::Text(text) => Value::String(text.clone()),
            Self::Date(Some(date)) => Value::String(date.format("%Y-%m-%d").to_string()),
            Self::Date(None) => Value::String(String::new()),
        }
    }

    fn mismatch(key: &'static str, expected: &str, raw: &Value) -> SettingsError {
        SettingsError::InvalidValue {
            key,
            reason: format!("expected {expected}, got {raw}"),
        }
    }
}

/// One row of the settings schema.
#[derive(Debug, Clone, Copy)]
pub struct SettingDescriptor {
    /// JSON key.
    pub key: &'static str,
    /// Label shown by a settings editor.
    pub title: &'static str,
    /// Value used when the key is absent.
    pub default: fn() -> SettingValue,
    /// Converts and checks a raw JSON value.
    pub validate: fn(&'static str, &Value) -> Result<SettingValue, SettingsError>,
    /// Folds a checked value into the settings.
    pub apply: fn(ReportSettings, SettingValue) -> ReportSettings,
    /// Reads the current value back.
    pub read: fn(&ReportSettings) -> SettingValue,
}

fn flag(key: &'static str, raw: &Value) -> Result<SettingValue, SettingsError> {
    match raw {
        Value::Bool(flag) => Ok(SettingValue::Flag(*flag)),
        Value::Null => Ok(SettingValue::Flag(false)),
        other => Err(SettingValue::mismatch(key, "a boolean", other)),
    }
}

fn text(key: &'static str, raw: &Value) -> Result<SettingValue, SettingsError> {
    match raw {
        Value::String(text) => Ok(SettingValue::Text(text.clone())),
        other => Err(SettingValue::mismatch(key, "a string", other)),
    }
}

fn non_empty_text(key: &'static str, raw: &Value) -> Result<SettingValue, SettingsError> {
    match text(key, raw)? {
        SettingValue::Text(text) if text.trim().is_empty() => Err(SettingsError::InvalidValue {
            key,
            reason: "must not be empty".to_string(),
        }),
        value => Ok(value),
    }
}

fn column(key: &'static str, raw: &Value) -> Result<SettingValue, SettingsError> {
    match non_empty_text(key, raw)? {
        SettingValue::Text(text) if !text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') => {
            Err(SettingsError::InvalidValue {
                key,
                reason: format!("{text:?} is not a column name"),
            })
        }
        value => Ok(value),
    }
}

fn date(key: &'static str, raw: &Value) -> Result<SettingValue, SettingsError> {
    match raw {
        Value::Null => Ok(SettingValue::Date(None)),
        Value::String(text) if text.trim().is_empty() => Ok(SettingValue::Date(None)),
        Value::String(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map(|date| SettingValue::Date(Some(date)))
            .map_err(|e| SettingsError::InvalidValue {
                key,
                reason: format!("{text:?}: {e}"),
            }),
        other => Err(SettingValue::mismatch(key, "a date", other)),
    }
}

fn as_flag(value: &SettingValue) -> bool {
    matches!(value, SettingValue::Flag(true))
}

fn into_text(value: SettingValue) -> String {
    match value {
        SettingValue::Text(text) => text,
        SettingValue::Flag(_) | SettingValue::Date(_) => String::new(),
    }
}

const fn as_date(value: &SettingValue) -> Option<NaiveDate> {
    match value {
        SettingValue::Date(date) => *date,
        SettingValue::Flag(_) | SettingValue::Text(_) => None,
    }
}

/// Every persisted setting, in editor order.
pub static SETTINGS_SCHEMA: [SettingDescriptor; 10] = [
    SettingDescriptor {
        key: "logo",
        title: "Imprimer le logo",
        default: || SettingValue::Flag(false),
        validate: flag,
        apply: |settings, value| ReportSettings {
            logo: as_flag(&value),
            ..settings
        },
        read: |settings| SettingValue::Flag(settings.logo),
    },
    SettingDescriptor {
        key: "logoname",
        title: "Nom de la composition du logo",
        default: || SettingValue::Text("Logo".to_string()),
        validate: non_empty_text,
        apply: |settings, value| ReportSettings {
            logo_name: into_text(value),
            ..settings
        },
        read: |settings| SettingValue::Text(settings.logo_name.clone()),
    },
    SettingDescriptor {
        key: "printheader",
        title: "Imprimer l'en-tête de la page",
        default: || SettingValue::Flag(false),
        validate: flag,
        apply: |settings, value| ReportSettings {
            print_header: as_flag(&value),
            ..settings
        },
        read: |settings| SettingValue::Flag(settings.print_header),
    },
    SettingDescriptor {
        key: "printtitle",
        title: "Imprimer le titre",
        default: || SettingValue::Flag(true),
        validate: flag,
        apply: |settings, value| ReportSettings {
            print_title: as_flag(&value),
            ..settings
        },
        read: |settings| SettingValue::Flag(settings.print_title),
    },
    SettingDescriptor {
        key: "column",
        title: "Colonne de regroupement",
        default: || SettingValue::Text("Gr2".to_string()),
        validate: column,
        apply: |settings, value| ReportSettings {
            column: into_text(value),
            ..settings
        },
        read: |settings| SettingValue::Text(settings.column.clone()),
    },
    SettingDescriptor {
        key: "decimals",
        title: "Montants sans décimales",
        default: || SettingValue::Flag(false),
        validate: flag,
        apply: |settings, value| ReportSettings {
            decimals: as_flag(&value),
            ..settings
        },
        read: |settings| SettingValue::Flag(settings.decimals),
    },
    SettingDescriptor {
        key: "selectionStartDate",
        title: "Date de début",
        default: || SettingValue::Date(None),
        validate: date,
        apply: |settings, value| ReportSettings {
            selection_start: as_date(&value),
            ..settings
        },
        read: |settings| SettingValue::Date(settings.selection_start),
    },
    SettingDescriptor {
        key: "selectionEndDate",
        title: "Date de fin",
        default: || SettingValue::Date(None),
        validate: date,
        apply: |settings, value| ReportSettings {
            selection_end: as_date(&value),
            ..settings
        },
        read: |settings| SettingValue::Date(settings.selection_end),
    },
    SettingDescriptor {
        key: "selectionChecked",
        title: "Période sélectionnée",
        default: || SettingValue::Flag(false),
        validate: flag,
        apply: |settings, value| ReportSettings {
            selection_checked: as_flag(&value),
            ..settings
        },
        read: |settings| SettingValue::Flag(settings.selection_checked),
    },
    SettingDescriptor {
        key: "version",
        title: "Version",
        default: || SettingValue::Text(SETTINGS_VERSION.to_string()),
        validate: text,
        apply: |settings, value| ReportSettings {
            version: into_text(value),
            ..settings
        },
        read: |_| SettingValue::Text(SETTINGS_VERSION.to_string()),
    },
];

/// Looks up a schema row by key.
#[must_use]
pub fn descriptor(key: &str) -> Option<&'static SettingDescriptor> {
    SETTINGS_SCHEMA.iter().find(|descriptor| descriptor.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = SETTINGS_SCHEMA.iter().map(|d| d.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SETTINGS_SCHEMA.len());
    }

    #[test]
    fn test_defaults_pass_their_own_validation() {
        for descriptor in &SETTINGS_SCHEMA {
            let default = (descriptor.default)();
            let checked = (descriptor.validate)(descriptor.key, &default.to_json());
            assert_eq!(checked, Ok(default), "{}", descriptor.key);
        }
    }

    #[test]
    fn test_read_returns_applied_value() {
        let column = descriptor("column").unwrap();
        let settings = (column.apply)(ReportSettings::default(), SettingValue::Text("Gr1".to_string()));
        assert_eq!((column.read)(&settings), SettingValue::Text("Gr1".to_string()));
    }

    #[rstest]
    #[case("logo", json!("yes"))]
    #[case("column", json!(""))]
    #[case("column", json!("Gr 2"))]
    #[case("column", json!("Gr=2"))]
    #[case("logoname", json!("  "))]
    #[case("selectionStartDate", json!("31/12/2024"))]
    #[case("selectionEndDate", json!(20241231))]
    #[case("version", json!(1.0))]
    fn test_invalid_values(#[case] key: &str, #[case] raw: Value) {
        let descriptor = descriptor(key).unwrap();
        assert!(matches!(
            (descriptor.validate)(descriptor.key, &raw),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[rstest]
    #[case(json!("2024-04-01"), Some(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()))]
    #[case(json!(""), None)]
    #[case(Value::Null, None)]
    fn test_dates(#[case] raw: Value, #[case] expected: Option<NaiveDate>) {
        assert_eq!(date("selectionStartDate", &raw), Ok(SettingValue::Date(expected)));
    }
}
