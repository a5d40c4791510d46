//! Localization settings.
//!
//! This module provides the [`I18nSettings`] struct holding the configuration
//! constants of the localization subsystem, plus loaders for TOML and JSON
//! configuration files and environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `CLINIC_I18N_DEFAULT_LANGUAGE` | `default_language` |
//! | `CLINIC_I18N_LOCALE_DIR` | `locale_dir` |
//! | `CLINIC_I18N_DOMAIN` | `domain` |
//! | `CLINIC_I18N_LOG_LEVEL` | `log_level` |
//! | `CLINIC_I18N_DEBUG` | `debug` |

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{I18nError, I18nResult};

/// Configuration constants for the localization subsystem.
///
/// These values are fixed at process start and passed by reference into every
/// component; nothing in this crate mutates them at runtime.
///
/// # Examples
///
/// ```
/// use clinic_rs_i18n::I18nSettings;
///
/// let settings = I18nSettings::default();
/// assert_eq!(settings.default_language, "en");
/// assert_eq!(settings.domain, "clinic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
    /// The default language tag. Always considered available.
    pub default_language: String,
    /// Root directory holding translation catalogs.
    pub locale_dir: PathBuf,
    /// The text domain used to build catalog filenames
    /// (e.g. `es_ES-clinic.po`).
    pub domain: String,
    /// Whether debug mode is enabled (controls log formatting).
    pub debug: bool,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            locale_dir: PathBuf::from("locale"),
            domain: "clinic".to_string(),
            debug: true,
            log_level: "info".to_string(),
        }
    }
}

impl I18nSettings {
    /// Loads settings from a TOML string.
    ///
    /// Fields not present in the TOML keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or cannot be deserialized.
    pub fn from_toml_str(toml_str: &str) -> I18nResult<Self> {
        toml::from_str(toml_str).map_err(|e| {
            I18nError::ConfigurationError(format!("Failed to parse TOML settings: {e}"))
        })
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> I18nResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            I18nError::ConfigurationError(format!(
                "Failed to read settings file '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or cannot be deserialized.
    pub fn from_json_str(json_str: &str) -> I18nResult<Self> {
        serde_json::from_str(json_str).map_err(|e| {
            I18nError::ConfigurationError(format!("Failed to parse JSON settings: {e}"))
        })
    }

    /// Loads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is malformed.
    pub fn from_json_file(path: impl AsRef<Path>) -> I18nResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            I18nError::ConfigurationError(format!(
                "Failed to read settings file '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Applies `CLINIC_I18N_*` environment variable overrides to these
    /// settings.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("CLINIC_I18N_DEFAULT_LANGUAGE") {
            self.default_language = value;
        }
        if let Ok(value) = env::var("CLINIC_I18N_LOCALE_DIR") {
            self.locale_dir = PathBuf::from(value);
        }
        if let Ok(value) = env::var("CLINIC_I18N_DOMAIN") {
            self.domain = value;
        }
        if let Ok(value) = env::var("CLINIC_I18N_LOG_LEVEL") {
            self.log_level = value;
        }
        if let Ok(value) = env::var("CLINIC_I18N_DEBUG") {
            self.debug = matches!(value.as_str(), "1" | "true" | "yes");
        }
    }
}
