//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as explicit wall-clock milliseconds
//! - Randomness only through an injected RNG
//! - Stable iteration order (missiles in spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod motion;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Circle, circles_intersect, collision_band, first_collision};
pub use difficulty::{
    Difficulty, DifficultyConfig, SpawnPattern, TrajectoryStyle, VisualEffects, level_config,
};
pub use motion::update_missiles;
pub use progression::{MilestoneTracker, game_time_secs, score_per_tick, should_increase_level};
pub use spawner::{
    SpawnPosition, resolve_trajectory, should_spawn, should_spawn_power_up, spawn_position,
};
pub use state::{
    GameEvent, GamePhase, GameState, Missile, MissileView, Plane, RunStats, Snapshot, Trajectory,
};
pub use tick::tick;
