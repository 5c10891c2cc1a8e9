//! Game state and core simulation types
//!
//! `GameState` is the single source of truth mutated by the tick pipeline and
//! by plane input. Everything the presentation layer needs is copied out into
//! a [`Snapshot`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::difficulty::{Difficulty, DifficultyConfig, VisualEffects};
use super::progression::MilestoneTracker;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session yet
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Collision or explicit end; frozen until restarted
    Ended,
}

/// Resolved per-missile trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trajectory {
    Straight,
    Curved,
}

/// A falling missile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    /// Session-unique, monotonically increasing
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Diameter
    pub size: f32,
    /// Fall speed (px/tick)
    pub speed: f32,
    pub trajectory: Trajectory,
    /// Phase accumulator for curved motion
    pub angle: f32,
    /// Homing destination column
    pub target_x: Option<f32>,
}

impl Missile {
    pub fn circle(&self) -> Circle {
        Circle::from_top_left(self.pos, self.size)
    }
}

/// The player's plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Top-left corner
    pub pos: Vec2,
    /// Diameter
    pub size: f32,
}

impl Plane {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    /// Starting position for a screen, clamped into bounds
    pub fn spawn(screen: Vec2, size: f32) -> Self {
        let mut plane = Self::new(
            Vec2::new(
                screen.x / 2.0 - PLANE_START_X_OFFSET,
                screen.y - PLANE_START_BOTTOM_OFFSET,
            ),
            size,
        );
        plane.clamp_to(screen);
        plane
    }

    pub fn circle(&self) -> Circle {
        Circle::from_top_left(self.pos, self.size)
    }

    /// Keep the plane inside `[0, screen - size]` on both axes
    pub fn clamp_to(&mut self, screen: Vec2) {
        let max = (screen - Vec2::splat(self.size)).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }

    /// Apply a drag delta and clamp
    pub fn move_by(&mut self, delta: Vec2, screen: Vec2) {
        self.pos += delta;
        self.clamp_to(screen);
    }
}

/// Fire-once notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The plane was hit; the session has ended
    Collision { missile_id: u32 },
    /// Score crossed a multiple of the milestone step
    ScoreMilestone { score: u64 },
    /// Level increased
    LevelUp { level: u32 },
}

/// Per-run statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub missiles_spawned: u32,
    /// Missiles that fell off the bottom of the screen
    pub missiles_dodged: u32,
    pub max_level: u32,
    pub play_time_ms: u64,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    /// Base preset for the active difficulty
    pub config: DifficultyConfig,
    pub score: u64,
    pub max_score: u64,
    /// Current level (>= 1)
    pub level: u32,
    pub plane: Plane,
    /// Active missiles in spawn order
    pub missiles: Vec<Missile>,
    /// Screen dimensions
    pub screen: Vec2,
    /// Wall-clock time the session started (ms)
    pub start_time_ms: u64,
    /// Elapsed game time (ms)
    pub elapsed_ms: u64,
    /// Game second of the last level increase
    pub last_level_increase_secs: u64,
    /// Wall-clock time of the last spawn (ms)
    pub last_spawn_ms: u64,
    pub milestones: MilestoneTracker,
    pub stats: RunStats,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Idle state for a screen; `start` must be called before ticking
    pub fn new(screen: Vec2, plane_size: f32, max_score: u64) -> Self {
        let difficulty = Difficulty::default();
        Self {
            phase: GamePhase::Idle,
            difficulty,
            config: difficulty.config(),
            score: 0,
            max_score,
            level: 1,
            plane: Plane::spawn(screen, plane_size),
            missiles: Vec::new(),
            screen,
            start_time_ms: 0,
            elapsed_ms: 0,
            last_level_increase_secs: 0,
            last_spawn_ms: 0,
            milestones: MilestoneTracker::new(SCORE_MILESTONE_STEP),
            stats: RunStats::default(),
            events: Vec::new(),
            next_id: 0,
        }
    }

    /// Reset every counter and begin a session at `now_ms`
    pub fn start(&mut self, difficulty: Difficulty, now_ms: u64) {
        let plane_size = self.plane.size;
        *self = Self {
            phase: GamePhase::Running,
            difficulty,
            config: difficulty.config(),
            start_time_ms: now_ms,
            last_spawn_ms: now_ms,
            stats: RunStats {
                max_level: 1,
                ..RunStats::default()
            },
            ..Self::new(self.screen, plane_size, self.max_score)
        };
    }

    /// Allocate a new missile ID
    pub fn next_missile_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Render-ready copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            game_over: self.phase == GamePhase::Ended,
            score: self.score,
            level: self.level,
            difficulty_name: self.config.name.clone(),
            plane_x: self.plane.pos.x,
            plane_y: self.plane.pos.y,
            plane_size: self.plane.size,
            missiles: self
                .missiles
                .iter()
                .map(|m| MissileView {
                    id: m.id,
                    x: m.pos.x,
                    y: m.pos.y,
                    size: m.size,
                })
                .collect(),
            visual_effects: self.config.visual_effects,
            stats: self.stats,
        }
    }
}

/// Missile as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissileView {
    /// Stable across frames
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Read-only per-tick view for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub game_over: bool,
    pub score: u64,
    pub level: u32,
    pub difficulty_name: String,
    pub plane_x: f32,
    pub plane_y: f32,
    pub plane_size: f32,
    pub missiles: Vec<MissileView>,
    pub visual_effects: VisualEffects,
    pub stats: RunStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Vec2 {
        Vec2::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT)
    }

    #[test]
    fn test_plane_spawn_position() {
        let plane = Plane::spawn(screen(), PLANE_SIZE);
        assert_eq!(plane.pos, Vec2::new(170.0, 694.0));
    }

    #[test]
    fn test_plane_clamped() {
        let mut plane = Plane::spawn(screen(), PLANE_SIZE);
        plane.move_by(Vec2::new(-1000.0, 1000.0), screen());
        assert_eq!(plane.pos, Vec2::new(0.0, DEFAULT_SCREEN_HEIGHT - PLANE_SIZE));

        plane.move_by(Vec2::new(5000.0, -5000.0), screen());
        assert_eq!(plane.pos, Vec2::new(DEFAULT_SCREEN_WIDTH - PLANE_SIZE, 0.0));
    }

    #[test]
    fn test_start_resets_and_seeds_timestamps() {
        let mut state = GameState::new(screen(), PLANE_SIZE, MAX_SCORE);
        assert_eq!(state.phase, GamePhase::Idle);

        state.score = 500;
        state.level = 4;
        let id = state.next_missile_id();
        assert_eq!(id, 0);

        state.start(Difficulty::Hard, 1234);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.start_time_ms, 1234);
        assert_eq!(state.last_spawn_ms, 1234);
        assert_eq!(state.config.name, "Hard");
        assert_eq!(state.next_missile_id(), 0);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(screen(), PLANE_SIZE, MAX_SCORE);
        state.start(Difficulty::Normal, 0);
        let id = state.next_missile_id();
        state.missiles.push(Missile {
            id,
            pos: Vec2::new(50.0, -10.0),
            size: 10.0,
            speed: 3.0,
            trajectory: Trajectory::Straight,
            angle: 0.0,
            target_x: None,
        });

        let snap = state.snapshot();
        assert!(!snap.game_over);
        assert_eq!(snap.difficulty_name, "Normal");
        assert_eq!(
            snap.missiles,
            vec![MissileView {
                id: 0,
                x: 50.0,
                y: -10.0,
                size: 10.0
            }]
        );
    }
}
