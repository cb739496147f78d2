//! Session state machine
//!
//! `GameSession` owns both positions and the difficulty-derived speeds. It
//! never schedules itself: a driver (animation frame loop, timer, test)
//! calls `tick` once per frame and stops when told to.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::detect_collision;
use super::motion::{Direction, move_player};
use super::pursuit::pursue;
use super::state::{GameEvent, PlayArea, RoundDecision, SessionState, Sprite, TickOutcome};
use crate::settings::Difficulty;

/// One player, one adversary, and whatever round is in progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Current phase
    pub state: SessionState,
    /// Difficulty applied at the last Start
    pub difficulty: Difficulty,
    /// Raw selector level, read on the next Start
    pub selected_level: i64,
    pub player_speed: f32,
    pub adversary_speed: f32,
    pub player: Vec2,
    pub adversary: Vec2,
    /// Frames ticked since the current round (re)started
    pub frames: u64,
    /// Rounds begun, counting restarts
    pub rounds: u32,
    /// Set between a collision and its `RoundDecision`
    awaiting_decision: bool,
    /// Pending notifications for the front-end
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        let difficulty = Difficulty::default();
        Self {
            state: SessionState::Idle,
            difficulty,
            selected_level: difficulty.level(),
            player_speed: difficulty.player_speed(),
            adversary_speed: difficulty.adversary_speed(),
            player: Vec2::ZERO,
            adversary: Vec2::ZERO,
            frames: 0,
            rounds: 0,
            awaiting_decision: false,
            events: Vec::new(),
        }
    }

    /// Record the difficulty selector's value; takes effect on the next Start
    pub fn select_difficulty(&mut self, level: i64) {
        self.selected_level = level;
    }

    /// Begin a round from Idle or Ended. Ignored while a round is live.
    pub fn start(&mut self, area: &PlayArea) -> bool {
        if self.state.is_live() {
            log::debug!("Start ignored: round already in progress");
            return false;
        }

        self.difficulty = Difficulty::from_level_or_default(self.selected_level);
        self.player_speed = self.difficulty.player_speed();
        self.adversary_speed = self.difficulty.adversary_speed();
        self.awaiting_decision = false;
        self.reset_positions(area);
        self.state = SessionState::Playing;
        self.rounds += 1;
        self.events.push(GameEvent::RoundStarted);

        log::info!(
            "Round started on {} (player speed {}, adversary speed {})",
            self.difficulty.as_str(),
            self.player_speed,
            self.adversary_speed
        );
        true
    }

    /// Playing -> Paused, Paused -> Playing. Returns true if the state changed.
    pub fn toggle_pause(&mut self) -> bool {
        if self.awaiting_decision {
            return false;
        }
        match self.state {
            SessionState::Playing => {
                self.state = SessionState::Paused;
                self.events.push(GameEvent::Paused);
                log::info!("Paused");
                true
            }
            SessionState::Paused => {
                self.state = SessionState::Playing;
                self.events.push(GameEvent::Resumed);
                log::info!("Resumed");
                true
            }
            _ => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        self.state == SessionState::Playing && self.toggle_pause()
    }

    /// Resume from Paused; the driver must restart its frame loop
    pub fn resume(&mut self) -> bool {
        self.state == SessionState::Paused && self.toggle_pause()
    }

    /// Apply an arrow key. Only effective while playing.
    pub fn handle_key(&mut self, dir: Direction, area: &PlayArea) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let moved = move_player(&mut self.player, dir, self.player_speed, area);
        if moved {
            self.emit_position(Sprite::Player);
        } else {
            log::trace!("Move {:?} rejected at {:?}", dir, self.player);
        }
        moved
    }

    /// Advance one frame: pursuit step, then collision check
    pub fn tick(&mut self, area: &PlayArea) -> TickOutcome {
        if !self.accepts_input() {
            return TickOutcome::Halted;
        }

        self.frames += 1;

        let before = self.adversary;
        pursue(&mut self.adversary, self.player, self.adversary_speed, area);
        if self.adversary != before {
            self.emit_position(Sprite::Adversary);
        }

        let collision = detect_collision(self.player, self.adversary);
        if collision.hit {
            self.awaiting_decision = true;
            self.events.push(GameEvent::RoundEnded);
            log::info!(
                "Caught after {} frames (delta {:?})",
                self.frames,
                collision.delta
            );
            return TickOutcome::RoundEnded;
        }

        TickOutcome::Continue
    }

    /// Answer the round-end prompt. Returns false if no round end is pending.
    pub fn resolve_round(&mut self, decision: RoundDecision, area: &PlayArea) -> bool {
        if !self.awaiting_decision {
            log::warn!("Round decision {:?} with no round end pending", decision);
            return false;
        }
        self.awaiting_decision = false;

        match decision {
            RoundDecision::Restart => {
                self.reset_positions(area);
                self.rounds += 1;
                self.events.push(GameEvent::RoundRestarted);
                log::info!("Round restarted");
            }
            RoundDecision::Stop => self.end(),
        }
        true
    }

    /// External stop: ends a live round
    pub fn stop(&mut self) -> bool {
        if !self.state.is_live() {
            return false;
        }
        self.awaiting_decision = false;
        self.end();
        true
    }

    pub fn is_awaiting_decision(&self) -> bool {
        self.awaiting_decision
    }

    /// True when keys and frames are processed
    pub fn accepts_input(&self) -> bool {
        self.state == SessionState::Playing && !self.awaiting_decision
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn end(&mut self) {
        self.state = SessionState::Ended;
        self.events.push(GameEvent::Stopped);
        log::info!("Session ended after {} rounds", self.rounds);
    }

    fn reset_positions(&mut self, area: &PlayArea) {
        self.player = Vec2::ZERO;
        self.adversary = area.adversary_spawn();
        self.frames = 0;
        self.emit_position(Sprite::Player);
        self.emit_position(Sprite::Adversary);
    }

    fn emit_position(&mut self, sprite: Sprite) {
        let pos = match sprite {
            Sprite::Player => self.player,
            Sprite::Adversary => self.adversary,
        };
        self.events.push(GameEvent::PositionChanged { sprite, pos });
    }
}
