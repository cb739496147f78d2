//! Adversary pursuit
//!
//! Greedy axis-by-axis stepping toward the player. There is no overshoot
//! check, so with `speed > 1` the adversary can hover up to `speed - 1` units
//! around the target.

use glam::Vec2;

use super::state::PlayArea;

/// Step one axis toward `target`, refusing to advance past `max` or below 0
#[inline]
fn step_axis(pos: f32, target: f32, speed: f32, max: f32) -> f32 {
    if pos < target && pos < max {
        pos + speed
    } else if pos > target && pos > 0.0 {
        pos - speed
    } else {
        pos
    }
}

/// Advance the adversary one pursuit step toward the player
pub fn pursue(adversary: &mut Vec2, player: Vec2, speed: f32, area: &PlayArea) {
    adversary.x = step_axis(adversary.x, player.x, speed, area.max_x());
    adversary.y = step_axis(adversary.y, player.y, speed, area.max_y());
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_steps_toward_player_on_both_axes() {
        let area = PlayArea::new(800.0, 600.0);
        let mut adversary = Vec2::new(700.0, 450.0);
        pursue(&mut adversary, Vec2::ZERO, 2.0, &area);
        assert_eq!(adversary, Vec2::new(698.0, 448.0));

        let mut adversary = Vec2::new(100.0, 100.0);
        pursue(&mut adversary, Vec2::new(300.0, 100.0), 5.0, &area);
        assert_eq!(adversary, Vec2::new(105.0, 100.0));
    }

    #[test]
    fn test_oscillates_around_target() {
        let area = PlayArea::new(800.0, 600.0);
        let player = Vec2::new(102.0, 0.0);
        let mut adversary = Vec2::new(100.0, 0.0);

        pursue(&mut adversary, player, 5.0, &area);
        assert_eq!(adversary.x, 105.0);
        pursue(&mut adversary, player, 5.0, &area);
        assert_eq!(adversary.x, 100.0);
    }

    #[test]
    fn test_bound_guards() {
        let area = PlayArea::new(800.0, 600.0);

        // At the far bound, the adversary stops following a player beyond it
        let mut adversary = Vec2::new(750.0, 0.0);
        pursue(&mut adversary, Vec2::new(765.0, 0.0), 2.0, &area);
        assert_eq!(adversary.x, 750.0);

        // Just under the bound it may overshoot it by less than one step
        let mut adversary = Vec2::new(749.0, 0.0);
        pursue(&mut adversary, Vec2::new(765.0, 0.0), 5.0, &area);
        assert_eq!(adversary.x, 754.0);

        // At zero it won't chase a player above it
        let mut adversary = Vec2::new(0.0, 0.0);
        pursue(&mut adversary, Vec2::new(-10.0, -5.0), 2.0, &area);
        assert_eq!(adversary, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_pursuit_approaches(
            ax in 0.0f32..750.0,
            ay in 0.0f32..550.0,
            px in 0.0f32..750.0,
            py in 0.0f32..550.0,
            speed in prop::sample::select(vec![1.0f32, 2.0, 5.0]),
        ) {
            let area = PlayArea::new(800.0, 600.0);
            let player = Vec2::new(px, py);
            let mut adversary = Vec2::new(ax, ay);
            let before = (adversary - player).abs();

            pursue(&mut adversary, player, speed, &area);
            let after = (adversary - player).abs();

            if before.x > speed {
                prop_assert!(after.x < before.x);
            }
            if before.y > speed {
                prop_assert!(after.y < before.y);
            }
        }
    }
}
