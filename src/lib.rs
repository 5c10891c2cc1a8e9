//! Missile Dodge - a single-screen touch-avoidance arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, progression)
//! - `game`: Orchestrator facade driven by the presentation layer
//! - `audio`: Presentation-owned sound service mapped from game events
//! - `settings`: Runtime configuration

pub mod audio;
pub mod error;
pub mod game;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick (ms), ~60 Hz
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Default screen dimensions (portrait phone)
    pub const DEFAULT_SCREEN_WIDTH: f32 = 390.0;
    pub const DEFAULT_SCREEN_HEIGHT: f32 = 844.0;

    /// Plane diameter
    pub const PLANE_SIZE: f32 = 20.0;
    /// Plane spawn offset from horizontal center (top-left corner)
    pub const PLANE_START_X_OFFSET: f32 = 25.0;
    /// Plane spawn offset from the bottom edge
    pub const PLANE_START_BOTTOM_OFFSET: f32 = 150.0;

    /// Score ceiling
    pub const MAX_SCORE: u64 = 999_999;
    /// Base score earned per tick
    pub const BASE_TICK_SCORE: f32 = 1.0;
    /// Score milestone step (fires a milestone event)
    pub const SCORE_MILESTONE_STEP: u64 = 100;

    /// Horizontal spawn margin from each screen edge
    pub const SPAWN_MARGIN: f32 = 15.0;
    /// Missiles below `screen_height + CULL_MARGIN` are removed
    pub const CULL_MARGIN: f32 = 100.0;
    /// Vertical band around the plane checked for collisions
    pub const COLLISION_BAND: f32 = 200.0;

    /// Active missiles at or above this fraction of the cap block spawning
    pub const SPAWN_SOFT_CAP: f32 = 0.8;
    /// Hard cap on scaled missile count
    pub const MAX_MISSILE_COUNT: u32 = 1000;
    /// Floor on scaled spawn interval (ms)
    pub const MIN_SPAWN_INTERVAL_MS: f32 = 30.0;

    /// Per-level multiplier growth for speed/spawn/count scaling
    pub const LEVEL_SCALE_STEP: f32 = 0.3;
    /// Per-level multiplier growth for score accrual
    pub const LEVEL_SCORE_STEP: f32 = 0.08;

    /// Curved trajectory phase increment per tick
    pub const CURVE_PHASE_STEP: f32 = 0.1;
    /// Curved trajectory sway radius
    pub const CURVE_RADIUS: f32 = 50.0;
    /// Curved trajectory sway damping
    pub const CURVE_DAMPING: f32 = 0.1;
    /// Homing step per tick (px)
    pub const HOMING_STEP: f32 = 1.0;

    /// Chance a `Mixed` spawn pattern produces a targeted missile
    pub const MIXED_TARGETED_CHANCE: f64 = 0.25;
    /// Chance a `Mixed` trajectory resolves to curved
    pub const MIXED_CURVED_CHANCE: f64 = 0.2;
}

/// Level multiplier `1 + (level - 1) * step`
#[inline]
pub fn level_multiplier(level: u32, step: f32) -> f32 {
    1.0 + level.saturating_sub(1) as f32 * step
}
