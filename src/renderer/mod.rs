//! Rendering collaborators
//!
//! The simulation only reports where sprites are. A `PositionSink` turns that
//! into something visible: a CSS translation in the browser, a log line in the
//! headless build.

use glam::Vec2;

use crate::sim::GameEvent;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;

/// Applies a sprite translation
pub trait PositionSink {
    fn apply_position(&mut self, element_id: &str, pos: Vec2);
}

/// Forward every position update in `events` to the sink.
/// Returns the number of updates applied.
pub fn apply_events<S: PositionSink + ?Sized>(sink: &mut S, events: &[GameEvent]) -> usize {
    let mut applied = 0;
    for event in events {
        if let GameEvent::PositionChanged { sprite, pos } = event {
            sink.apply_position(sprite.element_id(), *pos);
            applied += 1;
        }
    }
    applied
}

/// CSS transform value for a sprite at `pos`
pub fn translate_css(pos: Vec2) -> String {
    format!("translate({}px, {}px)", pos.x, pos.y)
}

/// Headless sink: logs translations and keeps the latest one per sprite
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub player: Option<Vec2>,
    pub adversary: Option<Vec2>,
    pub updates: u64,
}

impl PositionSink for LogRenderer {
    fn apply_position(&mut self, element_id: &str, pos: Vec2) {
        log::trace!("#{} -> {}", element_id, translate_css(pos));
        match element_id {
            "player" => self.player = Some(pos),
            "adversary" => self.adversary = Some(pos),
            other => log::warn!("Unknown sprite element: {}", other),
        }
        self.updates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Sprite;

    #[test]
    fn test_translate_css() {
        assert_eq!(translate_css(Vec2::new(35.0, 0.0)), "translate(35px, 0px)");
        assert_eq!(translate_css(Vec2::new(2.5, -5.0)), "translate(2.5px, -5px)");
    }

    #[test]
    fn test_apply_events_skips_non_position_events() {
        let mut sink = LogRenderer::default();
        let events = [
            GameEvent::PositionChanged {
                sprite: Sprite::Player,
                pos: Vec2::new(30.0, 0.0),
            },
            GameEvent::RoundStarted,
            GameEvent::PositionChanged {
                sprite: Sprite::Adversary,
                pos: Vec2::new(700.0, 450.0),
            },
            GameEvent::Paused,
        ];

        assert_eq!(apply_events(&mut sink, &events), 2);
        assert_eq!(sink.updates, 2);
        assert_eq!(sink.player, Some(Vec2::new(30.0, 0.0)));
        assert_eq!(sink.adversary, Some(Vec2::new(700.0, 450.0)));
    }
}
