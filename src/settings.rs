//! Runtime settings
//!
//! Screen geometry, core constants and audio preferences. Difficulty presets
//! are built in and not configurable here.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Core ===
    /// Plane diameter
    pub plane_size: f32,
    /// Score ceiling
    pub max_score: u64,
    /// Tick period the host should drive `tick` at (ms)
    pub tick_interval_ms: u64,
    /// Difficulty preselected by the menu
    pub default_difficulty: Difficulty,
    /// RNG seed for spawn placement
    pub seed: u64,

    // === Audio ===
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,

            plane_size: PLANE_SIZE,
            max_score: MAX_SCORE,
            tick_interval_ms: TICK_INTERVAL_MS,
            default_difficulty: Difficulty::Normal,
            seed: 0x5eed_cafe,

            sound_enabled: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
        }
    }
}

impl Settings {
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        log::info!(
            "Loaded settings ({}x{}, seed {})",
            settings.screen_width,
            settings.screen_height,
            settings.seed
        );
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        log::info!("Reading settings from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
