//! Missile spawning: when, where and with which trajectory

use glam::Vec2;
use rand::Rng;

use super::difficulty::{DifficultyConfig, SpawnPattern, TrajectoryStyle};
use super::state::{GameState, Missile, Trajectory};
use crate::consts::*;

/// Spawn gate
///
/// Always false once `active >= 0.8 * max` (soft cap), otherwise true when under
/// the cap and at least `interval_ms` has passed since the last spawn.
pub fn should_spawn(active: usize, max: u32, last_spawn_ms: u64, interval_ms: f32, now_ms: u64) -> bool {
    if active as f32 >= max as f32 * SPAWN_SOFT_CAP {
        return false;
    }
    active < max as usize && now_ms.saturating_sub(last_spawn_ms) as f32 >= interval_ms
}

/// Horizontal spawn placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPosition {
    pub x: f32,
    /// Homing destination, set for targeted spawns
    pub target_x: Option<f32>,
}

/// Pick a spawn column for `pattern`
///
/// `x` is uniform in `[margin, screen_width - missile_size - margin]`. Targeted
/// spawns also home toward the column centered under the plane.
pub fn spawn_position(
    pattern: SpawnPattern,
    plane_x: f32,
    plane_width: f32,
    missile_size: f32,
    screen_width: f32,
    rng: &mut impl Rng,
) -> SpawnPosition {
    let targeted = match pattern {
        SpawnPattern::Random => false,
        SpawnPattern::Targeted => true,
        SpawnPattern::Mixed => rng.random_bool(MIXED_TARGETED_CHANCE),
    };

    let span = (screen_width - missile_size - 2.0 * SPAWN_MARGIN).max(0.0);
    let x = SPAWN_MARGIN + rng.random::<f32>() * span;

    let target_x = targeted.then(|| {
        let max_x = (screen_width - missile_size - SPAWN_MARGIN).max(SPAWN_MARGIN);
        (plane_x + plane_width / 2.0 - missile_size / 2.0).clamp(SPAWN_MARGIN, max_x)
    });

    SpawnPosition { x, target_x }
}

/// Resolve a trajectory style into a concrete per-missile trajectory
pub fn resolve_trajectory(style: TrajectoryStyle, rng: &mut impl Rng) -> Trajectory {
    match style {
        TrajectoryStyle::Straight => Trajectory::Straight,
        TrajectoryStyle::Curved => Trajectory::Curved,
        TrajectoryStyle::Mixed => {
            if rng.random_bool(MIXED_CURVED_CHANCE) {
                Trajectory::Curved
            } else {
                Trajectory::Straight
            }
        }
    }
}

/// Roll the per-spawn power-up chance for `config`
///
/// No power-up entities are simulated; hosts use the roll to decide when to
/// offer one.
pub fn should_spawn_power_up(config: &DifficultyConfig, rng: &mut impl Rng) -> bool {
    rng.random_bool(f64::from(config.power_up_chance.clamp(0.0, 1.0)))
}

/// Create a missile just above the top edge using the level-scaled `config`
pub fn spawn_missile(state: &mut GameState, config: &DifficultyConfig, rng: &mut impl Rng) -> u32 {
    let size = config.missile_size;
    let placement = spawn_position(
        config.spawn_pattern,
        state.plane.pos.x,
        state.plane.size,
        size,
        state.screen.x,
        rng,
    );
    let trajectory = resolve_trajectory(config.trajectory, rng);

    let id = state.next_missile_id();
    state.missiles.push(Missile {
        id,
        pos: Vec2::new(placement.x, -size),
        size,
        speed: config.missile_speed,
        trajectory,
        angle: 0.0,
        target_x: placement.target_x,
    });
    state.stats.missiles_spawned += 1;

    log::debug!(
        "Spawned missile {} at x={:.1} ({:?}, target={:?})",
        id,
        placement.x,
        trajectory,
        placement.target_x
    );
    id
}
