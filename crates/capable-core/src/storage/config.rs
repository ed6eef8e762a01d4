//! TOML-based application configuration.
//!
//! Holds the presentation-side knobs that are policy, not task data:
//! the confirmation threshold for clearing completed tasks, and the view
//! the UI opens in when no preference has been persisted yet.
//!
//! Configuration is stored at `~/.config/capable/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, CoreError};
use crate::task::ViewMode;

fn default_clear_confirm_threshold() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Clearing more than this many completed tasks requires explicit
    /// confirmation from the user.
    #[serde(default = "default_clear_confirm_threshold")]
    pub clear_confirm_threshold: usize,
    /// View shown on first launch, before a view-mode preference exists.
    #[serde(default)]
    pub default_view: ViewMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clear_confirm_threshold: default_clear_confirm_threshold(),
            default_view: ViewMode::default(),
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn path() -> Result<PathBuf, CoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults if the file
    /// does not exist yet.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Write the configuration back to disk.
    pub fn save(&self) -> Result<(), CoreError> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }
}
