//! Frontend configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Getters, Deserialize)]
pub struct Settings {
    /// Window and grid geometry.
    #[serde(default)]
    window: WindowSettings,
}

/// Window and grid geometry shared by both frontends.
#[derive(Debug, Clone, PartialEq, Getters, Deserialize)]
pub struct WindowSettings {
    /// Window title.
    #[serde(default = "default_title")]
    title: String,

    /// Window width in points.
    #[serde(default = "default_width")]
    width: f32,

    /// Window height in points.
    #[serde(default = "default_height")]
    height: f32,

    /// Whether the window may be resized.
    #[serde(default)]
    resizable: bool,

    /// Edge length of one cell button in points.
    #[serde(default = "default_cell_size")]
    cell_size: f32,
}

fn default_title() -> String {
    "Tic-Tac-Toe".to_string()
}

fn default_width() -> f32 {
    300.0
}

fn default_height() -> f32 {
    400.0
}

fn default_cell_size() -> f32 {
    65.0
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            resizable: false,
            cell_size: default_cell_size(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(title = %settings.window.title, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads settings from `path` when given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
