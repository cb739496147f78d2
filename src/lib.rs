//! Sprite Chase - dodge the adversary inside a bounded play area
//!
//! Core modules:
//! - `sim`: Frame-driven game logic (movement, pursuit, collision, session state)
//! - `renderer`: Position sinks that apply sprite translations
//! - `settings`: Difficulty selection and cosmetic preferences
//! - `audio`: Background music that follows the session

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{CharacterSkin, Difficulty, Settings};
pub use sim::{GameEvent, GameSession, PlayArea, RoundDecision, SessionState, TickOutcome};

/// Game configuration constants
pub mod consts {
    /// Side length of both square sprites
    pub const SPRITE_SIZE: f32 = 50.0;

    /// Up/Left moves are only allowed from at least this far off the near edge
    pub const MOVE_EDGE_GUARD: f32 = 25.0;
    /// Down/Right moves are only allowed while this far from the far edge
    pub const MOVE_FAR_MARGIN: f32 = 70.0;

    /// Max per-axis distance between sprite corners that still counts as contact
    pub const COLLISION_TOLERANCE: f32 = 50.0;

    /// Adversary spawns this far in from the right edge
    pub const ADVERSARY_SPAWN_INSET_X: f32 = 100.0;
    /// Adversary spawns this far up from the bottom edge
    pub const ADVERSARY_SPAWN_INSET_Y: f32 = 150.0;
}
