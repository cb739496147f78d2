//! Session state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionState {
    /// Nothing started yet
    #[default]
    Idle,
    /// Frame loop running, input accepted
    Playing,
    /// Frame loop halted, positions kept
    Paused,
    /// Round stopped; Start reinitializes
    Ended,
}

impl SessionState {
    /// A round exists (Start is ignored while live)
    pub fn is_live(&self) -> bool {
        matches!(self, SessionState::Playing | SessionState::Paused)
    }
}

/// The two sprites on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Player,
    Adversary,
}

impl Sprite {
    /// DOM element id of the sprite
    pub fn element_id(&self) -> &'static str {
        match self {
            Sprite::Player => "player",
            Sprite::Adversary => "adversary",
        }
    }
}

/// Play area bounds, read fresh from the surface every time they are needed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    /// Negative sizes are treated as empty
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Largest x a sprite can occupy (0 when the area is narrower than a sprite)
    pub fn max_x(&self) -> f32 {
        (self.width - SPRITE_SIZE).max(0.0)
    }

    /// Largest y a sprite can occupy
    pub fn max_y(&self) -> f32 {
        (self.height - SPRITE_SIZE).max(0.0)
    }

    /// Adversary spawn point, opposite the player's corner
    pub fn adversary_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.width - ADVERSARY_SPAWN_INSET_X).max(0.0),
            (self.height - ADVERSARY_SPAWN_INSET_Y).max(0.0),
        )
    }
}

/// Notifications for the front-end collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A sprite moved; renderer should translate it
    PositionChanged { sprite: Sprite, pos: Vec2 },
    RoundStarted,
    Paused,
    Resumed,
    /// Adversary caught the player; a `RoundDecision` is required
    RoundEnded,
    /// Positions reset after a Restart decision
    RoundRestarted,
    Stopped,
}

/// What the driver should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Schedule the next frame
    Continue,
    /// Collision; resolve with `GameSession::resolve_round` before continuing
    RoundEnded,
    /// Not playing; stop scheduling
    Halted,
}

/// Answer to the "try again?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundDecision {
    Restart,
    Stop,
}
