//! Background music control
//!
//! The soundtrack follows the session: it rewinds on every (re)start, pauses
//! with the game and stops when the session ends. The event mapping is pure so
//! it can be checked natively; `MusicPlayer` drives the page's `<audio>`
//! element on the web.

use crate::sim::GameEvent;

/// What the music player should do in response to a session event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCommand {
    /// Rewind to the beginning and play
    Restart,
    Play,
    Pause,
}

impl MusicCommand {
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::RoundStarted | GameEvent::RoundRestarted => Some(MusicCommand::Restart),
            GameEvent::Resumed => Some(MusicCommand::Play),
            GameEvent::Paused | GameEvent::Stopped => Some(MusicCommand::Pause),
            GameEvent::PositionChanged { .. } | GameEvent::RoundEnded => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::MusicPlayer;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::HtmlAudioElement;

    use super::MusicCommand;
    use crate::sim::GameEvent;

    /// Wraps the `<audio>` element that plays the selected track
    pub struct MusicPlayer {
        element: HtmlAudioElement,
    }

    impl MusicPlayer {
        pub fn new(element: HtmlAudioElement) -> Self {
            Self { element }
        }

        /// Apply the commands implied by a batch of session events
        pub fn handle_events(&self, events: &[GameEvent]) {
            for command in events.iter().filter_map(MusicCommand::for_event) {
                self.apply(command);
            }
        }

        pub fn apply(&self, command: MusicCommand) {
            match command {
                MusicCommand::Restart => {
                    let _ = self.element.pause();
                    self.element.set_current_time(0.0);
                    self.play();
                }
                MusicCommand::Play => self.play(),
                MusicCommand::Pause => {
                    let _ = self.element.pause();
                }
            }
        }

        /// Switch tracks; keeps playing if the game is running
        pub fn set_track(&self, src: &str, keep_playing: bool) {
            self.element.set_src(src);
            if keep_playing {
                self.play();
            }
        }

        fn play(&self) {
            // Browsers reject autoplay before a user gesture
            if let Err(e) = self.element.play() {
                log::warn!("Audio playback refused: {:?}", e);
            }
        }
    }
}
