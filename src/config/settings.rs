//! User settings for wattage-cli
//!
//! Manages user preferences stored in config.json, currently the default
//! electricity tariff used by billing when no tariff is supplied.

use serde::{Deserialize, Serialize};

use super::paths::WattagePaths;
use crate::error::WattageError;

fn default_schema_version() -> u32 {
    1
}

/// User settings for wattage-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file (not the registry format)
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default tariff (cost per kWh) used by `bill` when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tariff: Option<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_tariff: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, creating defaults if the file doesn't exist
    pub fn load_or_create(paths: &WattagePaths) -> Result<Self, WattageError> {
        let path = paths.settings_file();

        if !path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| WattageError::Config(format!("Failed to read settings: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| WattageError::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WattagePaths) -> Result<(), WattageError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WattageError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WattageError::Config(format!("Failed to write settings: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_makes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WattagePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.default_tariff.is_none());
        assert!(paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WattagePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_tariff = Some(0.25);
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_tariff, Some(0.25));
    }
}
