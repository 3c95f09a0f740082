//! Game configuration (flight parameters, city layout, environment).
//! Loaded from skylane.ron at startup.

use flight::FlightParameters;
use procgen::CityConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Failure to read or parse a config file. Callers that can fall back to
/// defaults should; the error is surfaced for tooling that cannot.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Persistent simulation settings. Loaded from `skylane.ron` in the current
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Flight characteristics of the player craft.
    #[serde(default)]
    pub flight: FlightParameters,
    /// City generation parameters.
    #[serde(default)]
    pub city: CityConfig,
    /// Fraction of a full day/night cycle elapsed per second.
    #[serde(default = "default_day_night_speed")]
    pub day_night_speed: f32,
    /// How long the headless demo runs, in seconds.
    #[serde(default = "default_demo_seconds")]
    pub demo_seconds: f32,
}

fn default_day_night_speed() -> f32 {
    0.005
}
fn default_demo_seconds() -> f32 {
    30.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            flight: FlightParameters::default(),
            city: CityConfig::default(),
            day_night_speed: default_day_night_speed(),
            demo_seconds: default_demo_seconds(),
        }
    }
}

impl GameConfig {
    /// Load config from `skylane.ron`. If the file is missing or invalid,
    /// returns the default config (and warns on parse failures — a missing
    /// file is the normal first-run case).
    pub fn load() -> Self {
        let path = config_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => Self::default(),
            Err(e) => {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Load config from a specific path, surfacing any failure.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&data)?)
    }

    /// Save current config to `skylane.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("skylane.ron")
}
