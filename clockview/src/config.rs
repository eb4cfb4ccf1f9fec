//! Configuration loading utilities
//!
//! Reads clock style attributes from TOML files in the per-user config
//! directory. Attributes are only ever read; nothing is written back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::style::{Color, StyleConfig};

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error while reading config
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Get the base configuration directory for all clocks
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "clockview", "clocks").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the configuration file path for a specific clock
pub fn config_path(clock_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", clock_name)))
}

/// Load configuration for a specific clock
///
/// Returns `None` if the config file doesn't exist yet.
pub fn load_config<T: DeserializeOwned>(clock_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(clock_name).ok_or(ConfigError::NoConfigDir)?;
    load_config_from(&path)
}

/// Load configuration from an explicit path
pub fn load_config_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let config: T = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Style attributes as written in a config file
///
/// Every key is optional; absent keys keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StyleAttributes {
    pub show_hour_arrow: Option<bool>,
    pub show_minute_arrow: Option<bool>,
    pub show_second_arrow: Option<bool>,
    pub show_hour_labels: Option<bool>,
    pub show_circles: Option<bool>,
    pub show_shadow: Option<bool>,
    pub show_rectangle: Option<bool>,
    pub background_color: Option<String>,
    pub shadow_color: Option<String>,
    pub arrows_color: Option<String>,
    pub hour_labels_color: Option<String>,
    pub circles_color: Option<String>,
    pub label_text_size: Option<f32>,
}

impl StyleAttributes {
    /// Parse attributes from TOML text
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Overlay the present attributes onto `style`
    ///
    /// Malformed values are skipped individually with a warning.
    pub fn apply(&self, style: &mut StyleConfig) {
        let flags = [
            (self.show_hour_arrow, &mut style.show_hour_arrow),
            (self.show_minute_arrow, &mut style.show_minute_arrow),
            (self.show_second_arrow, &mut style.show_second_arrow),
            (self.show_hour_labels, &mut style.show_hour_labels),
            (self.show_circles, &mut style.show_circles),
            (self.show_shadow, &mut style.show_shadow),
            (self.show_rectangle, &mut style.show_rectangle),
        ];
        for (value, flag) in flags {
            if let Some(value) = value {
                *flag = value;
            }
        }

        let colors = [
            ("background_color", &self.background_color, &mut style.background_color),
            ("shadow_color", &self.shadow_color, &mut style.shadow_color),
            ("arrows_color", &self.arrows_color, &mut style.arrows_color),
            ("hour_labels_color", &self.hour_labels_color, &mut style.hour_labels_color),
            ("circles_color", &self.circles_color, &mut style.circles_color),
        ];
        for (key, value, color) in colors {
            let Some(value) = value else { continue };
            match value.parse::<Color>() {
                Ok(parsed) => *color = parsed,
                Err(e) => log::warn!("Ignoring {}: {}", key, e),
            }
        }

        match self.label_text_size {
            Some(size) if size.is_finite() && size >= 0.0 => style.label_text_size = size,
            Some(size) => log::warn!("Ignoring label_text_size: {} is not a valid size", size),
            None => {}
        }
    }
}

/// Build a style from the defaults and whatever `result` managed to load
///
/// Load failures are logged and leave the defaults untouched.
pub fn style_from_attributes(result: Result<Option<StyleAttributes>, ConfigError>) -> StyleConfig {
    let mut style = StyleConfig::default();
    match result {
        Ok(Some(attributes)) => attributes.apply(&mut style),
        Ok(None) => {}
        Err(e) => log::warn!("Failed to load style attributes, using defaults: {}", e),
    }
    style
}

/// Load the style for a specific clock, falling back to defaults
pub fn load_style(clock_name: &str) -> StyleConfig {
    style_from_attributes(load_config(clock_name))
}
