//! # Configuration Module
//!
//! This module loads the optional YAML configuration for the app. Every section
//! has sensible defaults so a config file only needs the keys it wants to change.
//!
//! ## Lookup Order:
//! 1. `./todo-bingo.yaml` in the working directory
//! 2. `config.yaml` in the platform config directory (via `directories`)
//!
//! When no file exists the built-in defaults are used. A file that exists but
//! cannot be read or parsed is a startup error.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::info;
use serde::Deserialize;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "todo-bingo.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// Directory holding the four artwork images
    pub assets_dir: PathBuf,
    pub list: ListConfig,
    pub wheel: WheelConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            assets_dir: PathBuf::from("assets"),
            list: ListConfig::default(),
            wheel: WheelConfig::default(),
        }
    }
}

/// Window geometry. The screen layouts are drawn on a fixed 600x400 canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Title shown before the first screen change
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            title: "Menu".to_string(),
        }
    }
}

/// Behaviour shared by the to-do and reward lists
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Rows visible at once
    pub max_items: usize,
    /// Rows moved per Up/Down key press
    pub scroll_speed: usize,
    /// Height of a single row in points
    pub row_height: f32,
    /// Gap between the top of the list and the first row
    pub top_inset: f32,
    /// Two clicks closer together than this count as a double-click
    pub double_click_ms: u64,
    /// Characters the edit box accepts
    pub max_edit_len: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            max_items: 7,
            scroll_speed: 2,
            row_height: 26.0,
            top_inset: 10.0,
            double_click_ms: 300,
            max_edit_len: 35,
        }
    }
}

/// Spinning wheel physics, in degrees per tick
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub min_speed: f32,
    pub max_speed: f32,
    /// Multiplier applied to the speed after every tick
    pub decay: f32,
    /// The wheel settles once the speed drops below this
    pub stop_threshold: f32,
    pub ticks_per_second: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            min_speed: 20.0,
            max_speed: 30.0,
            decay: 0.98,
            stop_threshold: 0.5,
            ticks_per_second: 60.0,
        }
    }
}

impl AppConfig {
    /// Load the first config file found, or the defaults if there is none
    pub fn load() -> Result<Self, ConfigError> {
        for path in Self::candidate_paths() {
            if path.is_file() {
                info!("⚙️ Loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        info!("⚙️ No configuration file found, using defaults");
        Ok(Self::default())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dirs) = ProjectDirs::from("", "", "todo-bingo") {
            paths.push(dirs.config_dir().join("config.yaml"));
        }
        paths
    }

    /// Read and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file means "all defaults"
        let config = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str::<Self>(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values the list and wheel logic cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
            ("list.row_height", self.list.row_height),
            ("list.top_inset", self.list.top_inset),
            ("wheel.min_speed", self.wheel.min_speed),
            ("wheel.max_speed", self.wheel.max_speed),
            ("wheel.decay", self.wheel.decay),
            ("wheel.stop_threshold", self.wheel.stop_threshold),
            ("wheel.ticks_per_second", self.wheel.ticks_per_second),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::Invalid(format!("{} must be a finite number", name)));
        }

        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::Invalid("window size must be positive".to_string()));
        }
        if self.list.max_items == 0 {
            return Err(ConfigError::Invalid("list.max_items must be at least 1".to_string()));
        }
        if self.list.row_height <= 0.0 {
            return Err(ConfigError::Invalid("list.row_height must be positive".to_string()));
        }
        if !(self.wheel.min_speed < self.wheel.max_speed) {
            return Err(ConfigError::Invalid(
                "wheel.min_speed must be lower than wheel.max_speed".to_string(),
            ));
        }
        if !(self.wheel.decay > 0.0 && self.wheel.decay < 1.0) {
            return Err(ConfigError::Invalid("wheel.decay must be between 0 and 1".to_string()));
        }
        if self.wheel.stop_threshold <= 0.0 || self.wheel.ticks_per_second <= 0.0 {
            return Err(ConfigError::Invalid(
                "wheel.stop_threshold and wheel.ticks_per_second must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.list.max_items, 7);
        assert_eq!(config.list.double_click_ms, 300);
        assert_eq!(config.list.max_edit_len, 35);
        assert_eq!(config.window.width, 600.0);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let file = write_config("list:\n  max_items: 5\nwheel:\n  decay: 0.9\n");
        let config = AppConfig::from_file(file.path()).unwrap();

        assert_eq!(config.list.max_items, 5);
        assert_eq!(config.list.scroll_speed, 2);
        assert_eq!(config.wheel.decay, 0.9);
        assert_eq!(config.wheel.min_speed, 20.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = write_config("   \n");
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let file = write_config("list: [this is not a map");
        let result = AppConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(&dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config("wheel:\n  min_speed: 30\n  max_speed: 20\n");
        assert!(matches!(AppConfig::from_file(file.path()), Err(ConfigError::Invalid(_))));

        let file = write_config("list:\n  max_items: 0\n");
        assert!(matches!(AppConfig::from_file(file.path()), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        for yaml in [
            "wheel:\n  min_speed: -.inf\n",
            "wheel:\n  max_speed: .inf\n",
            "wheel:\n  stop_threshold: .nan\n",
            "wheel:\n  ticks_per_second: .nan\n",
            "list:\n  row_height: .nan\n",
            "list:\n  top_inset: .inf\n",
            "window:\n  width: .nan\n",
        ] {
            let file = write_config(yaml);
            let result = AppConfig::from_file(file.path());
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "accepted {:?}", yaml);
        }
    }
}
