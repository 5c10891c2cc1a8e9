//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one frame. Order matters:
//! level-up, spawn, motion, collision, score.

use rand::Rng;

use super::collision::first_collision;
use super::difficulty::level_config;
use super::motion::update_missiles;
use super::progression::{game_time_secs, score_per_tick, should_increase_level};
use super::spawner::{should_spawn, spawn_missile};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance a running session to wall-clock time `now_ms`
///
/// Must be called exactly once per simulated frame. Does nothing unless the
/// session is running. Events are appended to `state.events`.
pub fn tick(state: &mut GameState, now_ms: u64, rng: &mut impl Rng) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.elapsed_ms = now_ms.saturating_sub(state.start_time_ms);
    state.stats.play_time_ms = state.elapsed_ms;

    // 1. Level-up
    let game_secs = game_time_secs(state.start_time_ms, now_ms);
    if should_increase_level(game_secs, state.last_level_increase_secs, &state.config) {
        state.last_level_increase_secs = game_secs;
        if state.level < state.config.max_level {
            state.level += 1;
            state.stats.max_level = state.stats.max_level.max(state.level);
            state.events.push(GameEvent::LevelUp { level: state.level });
            log::info!("Level {} reached at {}s", state.level, game_secs);
        }
    }

    // 2. Spawn
    let level_cfg = level_config(&state.config, state.level);
    if should_spawn(
        state.missiles.len(),
        level_cfg.missile_count,
        state.last_spawn_ms,
        level_cfg.spawn_interval_ms,
        now_ms,
    ) {
        spawn_missile(state, &level_cfg, rng);
        state.last_spawn_ms = now_ms;
    }

    // 3. Motion, homing and culling
    let culled = update_missiles(&mut state.missiles, state.screen.y);
    state.stats.missiles_dodged += culled as u32;

    // 4. Collision ends the session and skips scoring
    if let Some(missile_id) = first_collision(&state.plane, &state.missiles).map(|m| m.id) {
        state.phase = GamePhase::Ended;
        state.events.push(GameEvent::Collision { missile_id });
        log::info!(
            "Plane hit by missile {} - final score {} (level {})",
            missile_id,
            state.score,
            state.level
        );
        return;
    }

    // 5. Score
    let delta = score_per_tick(&state.config, state.level);
    state.score = (state.score + delta).min(state.max_score);
    for score in state.milestones.advance(state.score) {
        log::debug!("Score milestone {}", score);
        state.events.push(GameEvent::ScoreMilestone { score });
    }
}
