//! Difficulty presets and per-level scaling

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::level_multiplier;

/// Top-level difficulty selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Built-in preset for this difficulty
    pub fn config(&self) -> DifficultyConfig {
        match self {
            Difficulty::Normal => DifficultyConfig {
                name: "Normal".to_string(),
                missile_speed: 3.0,
                spawn_interval_ms: 200.0,
                missile_size: 10.0,
                missile_count: 200,
                score_multiplier: 1.0,
                plane_speed: 1.0,
                spawn_pattern: SpawnPattern::Random,
                trajectory: TrajectoryStyle::Straight,
                level_interval_secs: 5,
                max_level: 10,
                power_up_chance: 0.1,
                background_speed: 1.0,
                sound_pitch: 1.0,
                visual_effects: VisualEffects {
                    missile_trail: true,
                    explosion_particles: true,
                    screen_shake: false,
                },
            },
            Difficulty::Hard => DifficultyConfig {
                name: "Hard".to_string(),
                missile_speed: 6.0,
                spawn_interval_ms: 100.0,
                missile_size: 8.0,
                missile_count: 400,
                score_multiplier: 2.5,
                plane_speed: 1.2,
                spawn_pattern: SpawnPattern::Mixed,
                trajectory: TrajectoryStyle::Mixed,
                level_interval_secs: 5,
                max_level: 20,
                power_up_chance: 0.05,
                background_speed: 2.0,
                sound_pitch: 1.2,
                visual_effects: VisualEffects {
                    missile_trail: true,
                    explosion_particles: true,
                    screen_shake: true,
                },
            },
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Where new missiles are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPattern {
    /// Uniform x, no homing
    Random,
    /// Uniform x, homes toward the column under the plane
    Targeted,
    /// 25% targeted, otherwise random
    Mixed,
}

/// How missiles move sideways while falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrajectoryStyle {
    Straight,
    Curved,
    /// Resolved per missile at spawn: 20% curved
    Mixed,
}

/// Presentation-only effect toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualEffects {
    pub missile_trail: bool,
    pub explosion_particles: bool,
    pub screen_shake: bool,
}

/// Tuning for one difficulty tier (or one level of it, see [`level_config`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Display name
    pub name: String,
    /// Missile fall speed (px/tick)
    pub missile_speed: f32,
    /// Minimum time between spawns (ms)
    pub spawn_interval_ms: f32,
    /// Missile diameter
    pub missile_size: f32,
    /// Maximum concurrent missiles
    pub missile_count: u32,
    pub score_multiplier: f32,
    pub plane_speed: f32,
    pub spawn_pattern: SpawnPattern,
    pub trajectory: TrajectoryStyle,
    /// Seconds between level increases
    pub level_interval_secs: u64,
    pub max_level: u32,
    /// Power-up chance per roll [0, 1], see `should_spawn_power_up`
    pub power_up_chance: f32,
    pub background_speed: f32,
    pub sound_pitch: f32,
    pub visual_effects: VisualEffects,
}

/// Scale a base config to the given level (level >= 1)
///
/// Speed and score multiplier grow by `1 + (level - 1) * 0.3`, the spawn
/// interval shrinks by the same factor down to 30 ms, and the missile cap grows
/// (floored) up to 1000.
pub fn level_config(base: &DifficultyConfig, level: u32) -> DifficultyConfig {
    debug_assert!(level >= 1, "levels start at 1");
    let m = level_multiplier(level, LEVEL_SCALE_STEP);

    DifficultyConfig {
        missile_speed: base.missile_speed * m,
        spawn_interval_ms: (base.spawn_interval_ms / m).max(MIN_SPAWN_INTERVAL_MS),
        missile_count: ((base.missile_count as f32 * m).floor() as u32).min(MAX_MISSILE_COUNT),
        score_multiplier: base.score_multiplier * m,
        ..base.clone()
    }
}
