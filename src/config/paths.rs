//! Path management for wattage-cli
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `WATTAGE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/wattage-cli` or `~/.config/wattage-cli`
//! 3. Windows: `%APPDATA%\wattage-cli`

use std::path::PathBuf;

use crate::error::WattageError;

/// Manages all paths used by wattage-cli
#[derive(Debug, Clone)]
pub struct WattagePaths {
    /// Base directory for all wattage-cli data
    base_dir: PathBuf,
}

impl WattagePaths {
    /// Create a new WattagePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WattageError> {
        let base_dir = if let Ok(custom) = std::env::var("WATTAGE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WattagePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/wattage-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/wattage-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the appliance registry file
    pub fn registry_file(&self) -> PathBuf {
        self.data_dir().join("appliances.txt")
    }

    /// Get the path to the billing summary file
    pub fn billing_file(&self) -> PathBuf {
        self.data_dir().join("billing_summary.txt")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), WattageError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WattageError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WattageError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WattageError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| WattageError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("wattage-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WattageError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WattageError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("wattage-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WattagePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WattagePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.registry_file(),
            temp_dir.path().join("data").join("appliances.txt")
        );
        assert_eq!(
            paths.billing_file(),
            temp_dir.path().join("data").join("billing_summary.txt")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WattagePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
