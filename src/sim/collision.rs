//! Collision detection between the plane and missiles
//!
//! Everything is a circle. Entities store their top-left corner plus a
//! diameter, so callers convert to center + radius via [`Circle::from_top_left`]
//! before testing.

use glam::Vec2;

use super::state::{Missile, Plane};
use crate::consts::COLLISION_BAND;

/// A circle given by its center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    /// Circle inscribed in the square `[pos, pos + size]`
    pub fn from_top_left(pos: Vec2, size: f32) -> Self {
        let radius = size / 2.0;
        Self {
            center: pos + Vec2::splat(radius),
            radius,
        }
    }
}

/// True iff the distance between centers is strictly less than the sum of radii
#[inline]
pub fn circles_intersect(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) < a.radius + b.radius
}

/// Find the first missile (in list order) that hits the plane
///
/// Missiles whose `y` is too far from the plane's `y` are skipped without a
/// circle test. The scan stops at the first hit.
pub fn first_collision<'a>(plane: &Plane, missiles: &'a [Missile]) -> Option<&'a Missile> {
    let plane_circle = plane.circle();
    missiles
        .iter()
        .filter(|m| (m.pos.y - plane.pos.y).abs() <= collision_band(plane.size, m.size))
        .find(|m| circles_intersect(&plane_circle, &m.circle()))
}

/// Vertical pre-filter half-width for a plane/missile pair
///
/// Two inscribed circles can only overlap while their top edges are less than
/// `max(plane_size, missile_size)` apart, so the band never drops below that.
#[inline]
pub fn collision_band(plane_size: f32, missile_size: f32) -> f32 {
    COLLISION_BAND.max(plane_size.max(missile_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Trajectory;

    fn missile_at(id: u32, x: f32, y: f32, size: f32) -> Missile {
        Missile {
            id,
            pos: Vec2::new(x, y),
            size,
            speed: 3.0,
            trajectory: Trajectory::Straight,
            angle: 0.0,
            target_x: None,
        }
    }

    #[test]
    fn test_circles_intersect_overlap() {
        let plane = Circle::new(100.0, 100.0, 10.0);
        let near = Circle::new(105.0, 100.0, 3.0);
        let far = Circle::new(200.0, 100.0, 3.0);

        assert!(circles_intersect(&plane, &near));
        assert!(!circles_intersect(&plane, &far));
    }

    #[test]
    fn test_circles_touching_is_not_hit() {
        // Distance exactly equals radius sum
        let a = Circle::new(0.0, 0.0, 5.0);
        let b = Circle::new(8.0, 0.0, 3.0);
        assert!(!circles_intersect(&a, &b));
        assert!(!circles_intersect(&b, &a));
    }

    #[test]
    fn test_from_top_left() {
        let c = Circle::from_top_left(Vec2::new(10.0, 20.0), 20.0);
        assert_eq!(c.center, Vec2::new(20.0, 30.0));
        assert_eq!(c.radius, 10.0);
    }

    #[test]
    fn test_first_collision_in_list_order() {
        let plane = Plane::new(Vec2::new(100.0, 500.0), 20.0);
        let missiles = vec![
            missile_at(1, 0.0, 500.0, 10.0),
            missile_at(2, 104.0, 504.0, 10.0),
            missile_at(3, 106.0, 502.0, 10.0),
        ];

        let hit = first_collision(&plane, &missiles).map(|m| m.id);
        assert_eq!(hit, Some(2));
    }

    #[test]
    fn test_large_plane_hit_outside_default_band() {
        // 500 px plane: a missile 300 px below its top edge still overlaps it
        let plane = Plane::new(Vec2::new(0.0, 0.0), 500.0);
        let missiles = vec![missile_at(1, 245.0, 300.0, 10.0)];

        assert!(circles_intersect(&plane.circle(), &missiles[0].circle()));
        assert_eq!(first_collision(&plane, &missiles).map(|m| m.id), Some(1));
    }

    #[test]
    fn test_collision_band_default() {
        assert_eq!(collision_band(20.0, 10.0), COLLISION_BAND);
        assert_eq!(collision_band(500.0, 10.0), 500.0);
    }

    #[test]
    fn test_first_collision_none_outside_band() {
        let plane = Plane::new(Vec2::new(100.0, 500.0), 20.0);
        let missiles = vec![missile_at(1, 100.0, 100.0, 10.0)];
        assert!(first_collision(&plane, &missiles).is_none());
    }
}
