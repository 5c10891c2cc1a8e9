//! Level and score progression
//!
//! Two independent curves: level scaling (0.3 per level, see
//! [`level_config`](super::difficulty::level_config)) drives spawn/speed, while
//! score accrual grows by 0.08 per level.

use std::iter::StepBy;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyConfig;
use crate::consts::{BASE_TICK_SCORE, LEVEL_SCORE_STEP};
use crate::level_multiplier;

/// Whole seconds elapsed since the session started
#[inline]
pub fn game_time_secs(start_ms: u64, now_ms: u64) -> u64 {
    now_ms.saturating_sub(start_ms) / 1000
}

/// True when enough game time has passed since the last level increase
pub fn should_increase_level(
    game_time_secs: u64,
    last_increase_secs: u64,
    config: &DifficultyConfig,
) -> bool {
    game_time_secs.saturating_sub(last_increase_secs) >= config.level_interval_secs
}

/// Score added per tick: `floor(multiplier * (1 + (level - 1) * 0.08))`
pub fn score_per_tick(config: &DifficultyConfig, level: u32) -> u64 {
    let delta = BASE_TICK_SCORE * config.score_multiplier * level_multiplier(level, LEVEL_SCORE_STEP);
    delta.floor() as u64
}

/// High-water mark for score milestone notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneTracker {
    step: u64,
    /// Highest milestone already notified
    last_notified: u64,
}

impl MilestoneTracker {
    pub fn new(step: u64) -> Self {
        Self {
            step,
            last_notified: 0,
        }
    }

    /// Milestones crossed by moving to `score`, each returned at most once
    pub fn advance(&mut self, score: u64) -> StepBy<RangeInclusive<u64>> {
        let step = self.step;
        let reached = score / step * step;
        let first = self.last_notified + step;
        if reached > self.last_notified {
            self.last_notified = reached;
        }
        (first..=reached).step_by(step as usize)
    }

    pub fn last_notified(&self) -> u64 {
        self.last_notified
    }
}
