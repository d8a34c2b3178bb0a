// src/config.rs
//! Configuration management with platform-specific storage

use crate::error::{NavError, Result};
use crate::geopoint::{Endianness, GeopointFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub record_endianness: Endianness,
    pub default_format: GeopointFormat,
    pub tolerance_km: f64,
    pub log_level: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            record_endianness: Endianness::Little,
            default_format: GeopointFormat::LatLonDecMinute,
            tolerance_km: 0.001,
            log_level: "info".to_string(),
        }
    }
}

impl NavConfig {
    /// Load configuration from the per-user config file, falling back to
    /// defaults when it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_path()?)
    }

    /// Save configuration to the per-user config file
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| NavError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| NavError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| NavError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(path, contents)
            .map_err(|e| NavError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the receiver cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.tolerance_km.is_nan() || self.tolerance_km < 0.0 {
            return Err(NavError::Config(format!(
                "tolerance_km must be a non-negative number, got {}",
                self.tolerance_km
            )));
        }
        Ok(())
    }

    #[cfg(windows)]
    fn config_path() -> Result<PathBuf> {
        let appdata = std::env::var("APPDATA")
            .map_err(|_| NavError::Config("APPDATA environment variable not set".to_string()))?;

        Ok(PathBuf::from(appdata).join("liveview-nav").join("config.json"))
    }

    #[cfg(not(windows))]
    fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| NavError::Config("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home).join(".config").join("liveview-nav").join("config.json"))
    }

    pub fn update_format(&mut self, format: GeopointFormat) {
        self.default_format = format;
    }

    pub fn update_endianness(&mut self, endianness: Endianness) {
        self.record_endianness = endianness;
    }

    pub fn update_tolerance(&mut self, tolerance_km: f64) {
        self.tolerance_km = tolerance_km;
    }
}
