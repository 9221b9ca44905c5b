use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::query::SortKey;
use crate::error::SettingsError;
use crate::state::filters::DEFAULT_PRICE_CEILING;

/// User settings, read once at startup.
///
/// The file lives in the user's config directory:
/// - Linux: ~/.config/phone-catalog/settings.json
/// - macOS: ~/Library/Application Support/phone-catalog/settings.json
/// - Windows: %APPDATA%\phone-catalog\settings.json
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Catalog file to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Initial ordering of the phone list
    pub default_sort: SortKey,
    /// Upper bound of the price slider
    pub price_ceiling: u32,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_sort: SortKey::Popularity,
            price_ceiling: DEFAULT_PRICE_CEILING,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Get the path where the settings file is expected
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("phone-catalog");
        path.push("settings.json");
        Some(path)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Read settings from the default location.
    ///
    /// Without a config directory the defaults are used.
    pub fn load_default_location() -> Result<Self, SettingsError> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
