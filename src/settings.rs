//! Runtime settings
//!
//! Loaded from an optional JSON file; every field has a default so partial
//! files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SIM_DT, TICK_INTERVAL_MS};
use crate::error::SettingsError;
use crate::session::MAX_LEVEL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Tick loop ===
    /// Wall-clock period between ticks
    pub tick_interval_ms: u64,
    /// Logical timestep fed to each tick (independent of the real period)
    pub tick_dt: f64,

    // === Sessions ===
    /// Pending commands a session buffers before senders wait
    pub command_capacity: usize,
    /// Level a new session starts on
    pub starting_level: u32,

    // === Demo ===
    /// Seed for the autoplay trap planner
    pub demo_seed: u64,
    /// Tick cap per level in the demo binary
    pub demo_max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            tick_dt: SIM_DT,

            command_capacity: 64,
            starting_level: 1,

            demo_seed: 0x5eed,
            demo_max_ticks: 60 * 60,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_interval_ms == 0 {
            return Err(SettingsError::Invalid("tick_interval_ms must be positive"));
        }
        if !(self.tick_dt.is_finite() && self.tick_dt > 0.0) {
            return Err(SettingsError::Invalid("tick_dt must be a positive number"));
        }
        if self.command_capacity == 0 {
            return Err(SettingsError::Invalid("command_capacity must be positive"));
        }
        if !(1..=MAX_LEVEL).contains(&self.starting_level) {
            return Err(SettingsError::Invalid("starting_level is outside the level catalog"));
        }
        Ok(())
    }
}
