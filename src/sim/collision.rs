//! Collision detection between the two sprites
//!
//! Sprites are compared by their top-left corners with the full sprite size
//! as tolerance on each axis, so the catch zone is twice the sprite footprint.

use glam::Vec2;

use crate::consts::COLLISION_TOLERANCE;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the sprites are touching
    pub hit: bool,
    /// Absolute per-axis distance between the sprite corners
    pub delta: Vec2,
}

/// Check whether the adversary has caught the player
pub fn detect_collision(player: Vec2, adversary: Vec2) -> CollisionResult {
    let delta = (player - adversary).abs();
    CollisionResult {
        hit: delta.x <= COLLISION_TOLERANCE && delta.y <= COLLISION_TOLERANCE,
        delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_within_tolerance() {
        let result = detect_collision(Vec2::new(100.0, 100.0), Vec2::new(140.0, 140.0));
        assert!(result.hit);
        assert_eq!(result.delta, Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_no_collision_outside_tolerance() {
        let result = detect_collision(Vec2::new(100.0, 100.0), Vec2::new(160.0, 160.0));
        assert!(!result.hit);
        assert_eq!(result.delta, Vec2::new(60.0, 60.0));
    }

    #[test]
    fn test_tolerance_is_inclusive() {
        assert!(detect_collision(Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0)).hit);
        assert!(detect_collision(Vec2::new(50.0, 50.0), Vec2::new(0.0, 0.0)).hit);
    }

    #[test]
    fn test_both_axes_must_overlap() {
        assert!(!detect_collision(Vec2::new(0.0, 0.0), Vec2::new(10.0, 51.0)).hit);
        assert!(!detect_collision(Vec2::new(0.0, 0.0), Vec2::new(51.0, 10.0)).hit);
    }
}
