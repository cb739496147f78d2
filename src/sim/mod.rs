//! Frame-driven game logic
//!
//! Everything that decides where the sprites are lives here. This module must
//! stay free of rendering and platform dependencies:
//! - Play area bounds are passed in, never cached
//! - No self-scheduling; the driver calls `GameSession::tick`
//! - Side effects leave as `GameEvent`s

pub mod collision;
pub mod motion;
pub mod pursuit;
pub mod session;
pub mod state;

pub use collision::{CollisionResult, detect_collision};
pub use motion::{Direction, move_player};
pub use pursuit::pursue;
pub use session::GameSession;
pub use state::{GameEvent, PlayArea, RoundDecision, SessionState, Sprite, TickOutcome};
