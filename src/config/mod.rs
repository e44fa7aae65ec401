//! Configuration module for flashr
//!
//! Manages application configuration: where the catalog descriptor, status
//! feed, and flash file live, plus serialization preferences.
//! Configuration is stored in the user's config directory.

use std::fs;
use std::path::PathBuf;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::codec::EncodeStyle;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FlashrConfig {
    /// Path to the cities descriptor document
    #[serde(default)]
    pub cities_file: Option<PathBuf>,

    /// Path to the status feed document
    #[serde(default)]
    pub status_file: Option<PathBuf>,

    /// Path to the flash file holding the find-state ledger
    #[serde(default)]
    pub flash_file: Option<PathBuf>,

    /// View mode used when a command does not pass one
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Token layout when writing the flash file
    #[serde(default)]
    pub encode_style: EncodeStyle,

    /// Re-emit `key: value` properties as comments when saving
    ///
    /// The historical format dropped properties on save; off by default.
    #[serde(default)]
    pub emit_properties: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_mode() -> String {
    "flashable".to_string()
}

impl FlashrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        let flashr_config_dir = config_dir.join("flashr");
        Ok(flashr_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::new_default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Default configuration, with `default_mode` filled in
    #[must_use]
    pub fn new_default() -> Self {
        Self {
            default_mode: default_mode(),
            ..Self::default()
        }
    }

    /// Flash-file path: configured value or `<data dir>/flashr/flashfile.txt`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the system data
    /// directory cannot be determined.
    pub fn flash_file_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.flash_file {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("flashr").join("flashfile.txt"))
    }
}
