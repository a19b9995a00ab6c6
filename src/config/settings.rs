//! User settings for MindMyMoney
//!
//! Presentation preferences only; records are never written to disk. The
//! settings are read once at start-up and stay fixed for the session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Glyph repeated to draw report bars
    #[serde(default = "default_bar_glyph")]
    pub bar_glyph: String,

    /// Percentage represented by one bar glyph
    #[serde(default = "default_bar_step")]
    pub bar_step_percent: f64,

    /// Interactive prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether to print the logo and greeting on start
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_bar_glyph() -> String {
    "▇".to_string()
}

fn default_bar_step() -> f64 {
    5.0
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_show_banner() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            bar_glyph: default_bar_glyph(),
            bar_step_percent: default_bar_step(),
            prompt: default_prompt(),
            show_banner: default_show_banner(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, or defaults if absent
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        Self::load_from(&paths.settings_file())
    }

    /// Load settings from an explicit file, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, TrackerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            TrackerError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))
    }

    fn validate(&self) -> Result<(), TrackerError> {
        if !(self.bar_step_percent.is_finite() && self.bar_step_percent > 0.0) {
            return Err(TrackerError::Config(format!(
                "bar_step_percent must be greater than 0, got {}",
                self.bar_step_percent
            )));
        }
        Ok(())
    }
}
