//! Player movement from discrete arrow-key input
//!
//! Each accepted keypress is one jump of `player_speed`. Guards are checked
//! against the position before the jump; a rejected move does not snap to the
//! edge, it simply doesn't happen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::PlayArea;
use crate::consts::{MOVE_EDGE_GUARD, MOVE_FAR_MARGIN};

/// Arrow-key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a DOM `KeyboardEvent.key` value; non-arrow keys are ignored
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Apply one guarded jump. Returns true if the player moved.
pub fn move_player(pos: &mut Vec2, dir: Direction, speed: f32, area: &PlayArea) -> bool {
    let allowed = match dir {
        Direction::Up => pos.y >= MOVE_EDGE_GUARD,
        Direction::Down => pos.y < area.height - MOVE_FAR_MARGIN,
        Direction::Left => pos.x >= MOVE_EDGE_GUARD,
        Direction::Right => pos.x < area.width - MOVE_FAR_MARGIN,
    };
    if !allowed {
        return false;
    }

    match dir {
        Direction::Up => pos.y -= speed,
        Direction::Down => pos.y += speed,
        Direction::Left => pos.x -= speed,
        Direction::Right => pos.x += speed,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_key() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("a"), None);
        assert_eq!(Direction::from_key("arrowup"), None);
    }

    #[test]
    fn test_move_from_origin() {
        let area = PlayArea::new(800.0, 600.0);
        let mut pos = Vec2::ZERO;

        // Near edges: rejected, no snapping
        assert!(!move_player(&mut pos, Direction::Up, 35.0, &area));
        assert!(!move_player(&mut pos, Direction::Left, 35.0, &area));
        assert_eq!(pos, Vec2::ZERO);

        assert!(move_player(&mut pos, Direction::Right, 35.0, &area));
        assert!(move_player(&mut pos, Direction::Down, 35.0, &area));
        assert_eq!(pos, Vec2::new(35.0, 35.0));

        assert!(move_player(&mut pos, Direction::Left, 35.0, &area));
        assert_eq!(pos.x, 0.0);
    }

    #[test]
    fn test_guard_is_checked_before_move() {
        let area = PlayArea::new(800.0, 600.0);

        let mut pos = Vec2::new(24.0, 25.0);
        assert!(!move_player(&mut pos, Direction::Left, 30.0, &area));
        assert!(move_player(&mut pos, Direction::Up, 30.0, &area));
        assert_eq!(pos, Vec2::new(24.0, -5.0));

        // Far edge: x < 800 - 70
        let mut pos = Vec2::new(730.0, 0.0);
        assert!(!move_player(&mut pos, Direction::Right, 30.0, &area));
        let mut pos = Vec2::new(729.0, 0.0);
        assert!(move_player(&mut pos, Direction::Right, 30.0, &area));
        assert_eq!(pos.x, 759.0);
    }

    #[test]
    fn test_degenerate_area_blocks_far_moves() {
        let area = PlayArea::new(0.0, 0.0);
        let mut pos = Vec2::ZERO;
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert!(!move_player(&mut pos, dir, 35.0, &area));
        }
        assert_eq!(pos, Vec2::ZERO);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            width in 0.0f32..1600.0,
            height in 0.0f32..1200.0,
            speed in prop::sample::select(vec![25.0f32, 30.0, 35.0]),
            moves in prop::collection::vec(direction(), 0..200),
        ) {
            let area = PlayArea::new(width, height);
            let mut pos = Vec2::ZERO;
            for dir in moves {
                move_player(&mut pos, dir, speed, &area);
                prop_assert!(pos.x >= 0.0 && pos.y >= 0.0);
                prop_assert!(pos.x <= area.max_x() + MOVE_EDGE_GUARD);
                prop_assert!(pos.y <= area.max_y() + MOVE_EDGE_GUARD);
            }
        }
    }
}
