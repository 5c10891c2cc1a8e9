//! Per-tick missile motion and off-screen culling

use super::state::{Missile, Trajectory};
use crate::consts::*;

impl Missile {
    /// Move one tick along the resolved trajectory
    ///
    /// Curved missiles sway by `sin(angle + 0.1) * 50 * 0.1` and keep
    /// accumulating their phase.
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
        if self.trajectory == Trajectory::Curved {
            let phase = self.angle + CURVE_PHASE_STEP;
            self.pos.x += phase.sin() * CURVE_RADIUS * CURVE_DAMPING;
            self.angle = phase;
        }
    }

    /// Step toward `target_x` by at most one unit, never overshooting
    pub fn home_toward_target(&mut self) {
        let Some(target) = self.target_x else {
            return;
        };
        let x = self.pos.x;
        if x < target {
            self.pos.x = (x + HOMING_STEP).min(target);
        } else if x > target {
            self.pos.x = (x - HOMING_STEP).max(target);
        }
    }

    /// Past the bottom edge plus the cull margin
    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.pos.y >= screen_height + CULL_MARGIN
    }
}

/// Advance, home and cull all missiles; returns how many were culled
pub fn update_missiles(missiles: &mut Vec<Missile>, screen_height: f32) -> usize {
    for missile in missiles.iter_mut() {
        missile.advance();
        missile.home_toward_target();
    }
    let before = missiles.len();
    missiles.retain(|m| !m.is_off_screen(screen_height));
    before - missiles.len()
}
