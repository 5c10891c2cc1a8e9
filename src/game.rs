//! Game loop orchestrator
//!
//! Owns the authoritative [`GameState`] and the spawn RNG, and exposes the
//! commands the presentation layer drives: `start`, `end`, `set_plane_delta`
//! and `tick`. The host serializes calls (single-threaded event queue); no
//! call blocks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::GameError;
use crate::settings::Settings;
use crate::sim::{self, Difficulty, GameEvent, GamePhase, GameState, Snapshot};

/// A game session host
pub struct Game {
    state: GameState,
    rng: Pcg32,
    tick_interval_ms: u64,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(settings.screen(), settings.plane_size, settings.max_score),
            rng: Pcg32::seed_from_u64(settings.seed),
            tick_interval_ms: settings.tick_interval_ms,
        }
    }

    /// Begin a fresh session; any previous session is discarded
    pub fn start(&mut self, difficulty: Difficulty, now_ms: u64) {
        self.state.start(difficulty, now_ms);
        log::info!(
            "Game started ({}, max level {})",
            self.state.config.name,
            self.state.config.max_level
        );
    }

    /// Start by presentation key (`"normal"` / `"hard"`)
    pub fn start_named(&mut self, difficulty: &str, now_ms: u64) -> Result<(), GameError> {
        let difficulty = difficulty.parse::<Difficulty>()?;
        self.start(difficulty, now_ms);
        Ok(())
    }

    /// End the session on request (e.g. back to menu)
    pub fn end(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        self.state.phase = GamePhase::Ended;
        log::info!(
            "Game ended - score {}, level {}, {} missiles dodged",
            self.state.score,
            self.state.level,
            self.state.stats.missiles_dodged
        );
    }

    /// Move the plane by a drag delta, clamped to the screen
    ///
    /// Ignored unless running: stale input after game-over is expected.
    pub fn set_plane_delta(&mut self, dx: f32, dy: f32) {
        if !self.state.is_running() {
            return;
        }
        let screen = self.state.screen;
        self.state.plane.move_by(Vec2::new(dx, dy), screen);
    }

    /// Advance one frame at wall-clock `now_ms`
    ///
    /// Returns the events produced this tick. Ticking an ended session is a
    /// no-op; ticking before the first `start` is an error.
    pub fn tick(&mut self, now_ms: u64) -> Result<Vec<GameEvent>, GameError> {
        if self.state.phase == GamePhase::Idle {
            return Err(GameError::NotStarted);
        }
        sim::tick(&mut self.state, now_ms, &mut self.rng);
        Ok(self.drain_events())
    }

    /// Take any pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Tick period the host timer should use
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn game() -> Game {
        Game::new(&Settings::default())
    }

    /// Tick at the nominal rate from `from_ms` (exclusive) up to `to_ms`
    fn run(game: &mut Game, from_ms: u64, to_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut now = from_ms + TICK_INTERVAL_MS;
        while now <= to_ms {
            events.extend(game.tick(now).unwrap());
            now += TICK_INTERVAL_MS;
        }
        events
    }

    #[test]
    fn test_tick_before_start() {
        let mut game = game();
        assert!(matches!(game.tick(16), Err(GameError::NotStarted)));
    }

    #[test]
    fn test_start_named_rejects_unknown() {
        let mut game = game();
        assert!(matches!(
            game.start_named("insane", 0),
            Err(GameError::InvalidDifficulty(_))
        ));
        assert_eq!(game.phase(), GamePhase::Idle);

        game.start_named("hard", 0).unwrap();
        assert_eq!(game.snapshot().difficulty_name, "Hard");
    }

    #[test]
    fn test_plane_delta_clamped_and_ignored_when_not_running() {
        let mut game = game();
        let start = game.snapshot();
        game.set_plane_delta(10.0, 10.0);
        assert_eq!(game.snapshot().plane_x, start.plane_x);

        game.start(Difficulty::Normal, 0);
        game.set_plane_delta(-10.0, 5.0);
        let snap = game.snapshot();
        assert_eq!((snap.plane_x, snap.plane_y), (160.0, 699.0));

        game.set_plane_delta(-10_000.0, 10_000.0);
        let snap = game.snapshot();
        assert_eq!(
            (snap.plane_x, snap.plane_y),
            (0.0, DEFAULT_SCREEN_HEIGHT - PLANE_SIZE)
        );

        game.end();
        game.set_plane_delta(50.0, -50.0);
        let after = game.snapshot();
        assert_eq!((after.plane_x, after.plane_y), (snap.plane_x, snap.plane_y));
    }

    #[test]
    fn test_end_freezes_session() {
        let mut game = game();
        game.start(Difficulty::Normal, 0);
        run(&mut game, 0, 1600);
        game.end();
        assert_eq!(game.phase(), GamePhase::Ended);

        let frozen = game.snapshot();
        assert!(frozen.game_over);
        let events = run(&mut game, 1600, 3200);
        assert!(events.is_empty());
        assert_eq!(game.snapshot(), frozen);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = game();
        game.start(Difficulty::Normal, 0);
        run(&mut game, 0, 6000);
        game.end();
        assert!(game.state().score > 0);

        game.start(Difficulty::Hard, 100_000);
        let state = game.state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(state.missiles.is_empty());
        assert_eq!(state.start_time_ms, 100_000);
        assert_eq!(state.last_spawn_ms, 100_000);
        assert_eq!(state.last_level_increase_secs, 0);
        assert_eq!(state.milestones.last_notified(), 0);
        assert_eq!(state.stats.missiles_spawned, 0);
        assert!(state.events.is_empty());

        // Ids restart for the new session
        run(&mut game, 100_000, 100_200);
        assert_eq!(game.snapshot().missiles.first().map(|m| m.id), Some(0));
    }
}
