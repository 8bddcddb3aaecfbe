//! Settings loading from configuration files.
//!
//! This module loads [`Settings`] from TOML, JSON, or YAML files and applies
//! environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML, JSON, or YAML file (deep-merged over the defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! The order of keys inside `routes` is preserved for every format.
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `PARSIND_BASE_ROUTE` | `base_route` |
//! | `PARSIND_CONTROLLERS_DIR` | `controllers_dir` |
//! | `PARSIND_CONTROLLERS_CASE` | `controllers_case` |
//! | `PARSIND_CONTROLLERS_SUFFIX` | `controllers_suffix` |
//! | `PARSIND_DEBUG` | `debug` |
//! | `PARSIND_LOG_LEVEL` | `log_level` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use parsind_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/routes.toml").unwrap();
//! let settings = settings_loader::from_yaml_file_with_env("config/routes.yaml").unwrap();
//! ```

use std::path::Path;

use crate::error::{ParsindError, ParsindResult};
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Fields not present in the TOML keep their default values.
pub fn from_toml_str(toml_str: &str) -> ParsindResult<Settings> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| ParsindError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;
    from_json_value(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> ParsindResult<Settings> {
    from_toml_str(&read_file(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> ParsindResult<Settings> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings)?;
    Ok(settings)
}

/// Loads settings from a JSON string.
pub fn from_json_str(json_str: &str) -> ParsindResult<Settings> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| ParsindError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;
    from_json_value(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> ParsindResult<Settings> {
    from_json_str(&read_file(path.as_ref(), "JSON")?)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> ParsindResult<Settings> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings)?;
    Ok(settings)
}

/// Loads settings from a YAML string.
pub fn from_yaml_str(yaml_str: &str) -> ParsindResult<Settings> {
    // An empty YAML document is `null`; treat it like an empty mapping.
    let json_value: Option<serde_json::Value> = serde_yaml::from_str(yaml_str)
        .map_err(|e| ParsindError::ConfigurationError(format!("Failed to parse YAML: {e}")))?;
    from_json_value(
        json_value.unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new())),
        "YAML",
    )
}

/// Loads settings from a YAML file.
pub fn from_yaml_file(path: impl AsRef<Path>) -> ParsindResult<Settings> {
    from_yaml_str(&read_file(path.as_ref(), "YAML")?)
}

/// Loads settings from a YAML file and then applies environment variable overrides.
pub fn from_yaml_file_with_env(path: impl AsRef<Path>) -> ParsindResult<Settings> {
    let mut settings = from_yaml_file(path)?;
    apply_env_overrides(&mut settings)?;
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> ParsindResult<Settings> {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings)?;
    Ok(settings)
}

/// Applies environment variable overrides to a settings struct.
///
/// Supported environment variables:
///
/// - `PARSIND_BASE_ROUTE` -> `base_route`
/// - `PARSIND_CONTROLLERS_DIR` -> `controllers_dir`
/// - `PARSIND_CONTROLLERS_CASE` -> `controllers_case` (`camel`, `snake` or `pascal`)
/// - `PARSIND_CONTROLLERS_SUFFIX` -> `controllers_suffix`
/// - `PARSIND_DEBUG` -> `debug` (values: "true"/"1"/"yes" => true, anything else => false)
/// - `PARSIND_LOG_LEVEL` -> `log_level`
///
/// # Errors
///
/// Returns [`ParsindError::ConfigurationError`] if `PARSIND_CONTROLLERS_CASE`
/// holds an unknown case.
pub fn apply_env_overrides(settings: &mut Settings) -> ParsindResult<()> {
    if let Ok(val) = std::env::var("PARSIND_BASE_ROUTE") {
        settings.base_route = val;
    }

    if let Ok(val) = std::env::var("PARSIND_CONTROLLERS_DIR") {
        settings.controllers_dir = val.into();
    }

    if let Ok(val) = std::env::var("PARSIND_CONTROLLERS_CASE") {
        settings.controllers_case = val.parse()?;
    }

    if let Ok(val) = std::env::var("PARSIND_CONTROLLERS_SUFFIX") {
        settings.controllers_suffix = val;
    }

    if let Ok(val) = std::env::var("PARSIND_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("PARSIND_LOG_LEVEL") {
        settings.log_level = val;
    }

    Ok(())
}

// ============================================================
// Helpers
// ============================================================

fn read_file(path: &Path, format: &str) -> ParsindResult<String> {
    tracing::debug!(path = %path.display(), format, "reading settings file");
    Ok(std::fs::read_to_string(path)?)
}

/// Merges a parsed document over the default settings and deserializes it.
fn from_json_value(value: serde_json::Value, format: &str) -> ParsindResult<Settings> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        ParsindError::SerializationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        ParsindError::ConfigurationError(format!(
            "Failed to deserialize settings from {format}: {e}"
        ))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}
