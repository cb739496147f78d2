//! Sprite Chase entry point
//!
//! Web: wires DOM events into the session and runs the frame loop.
//! Native: runs a scripted headless round and logs what happened. An optional
//! first argument picks the difficulty (`easy`, `normal`, `heroic` or 1-3).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, EventTarget, HtmlAudioElement, HtmlElement, HtmlInputElement,
        HtmlSelectElement, KeyboardEvent,
    };

    use sprite_chase::audio::MusicPlayer;
    use sprite_chase::renderer::{DomRenderer, apply_events};
    use sprite_chase::settings::CharacterSkin;
    use sprite_chase::Settings;
    use sprite_chase::sim::{
        Direction, GameSession, PlayArea, RoundDecision, SessionState, TickOutcome,
    };

    /// Game instance holding all state
    struct App {
        session: GameSession,
        settings: Settings,
        renderer: DomRenderer,
        music: MusicPlayer,
        game_area: HtmlElement,
        pause_btn: HtmlElement,
        /// A frame callback is scheduled
        loop_running: bool,
    }

    impl App {
        /// Bounds are read from the surface every time; it may have been resized
        fn play_area(&self) -> PlayArea {
            PlayArea::new(
                self.game_area.client_width() as f32,
                self.game_area.client_height() as f32,
            )
        }

        /// Push queued session events out to the renderer and music player
        fn flush(&mut self) {
            let events = self.session.drain_events();
            apply_events(&mut self.renderer, &events);
            self.music.handle_events(&events);
        }

        fn update_pause_label(&self) {
            let label = if self.session.state == SessionState::Paused {
                "Resume"
            } else {
                "Pause"
            };
            self.pause_btn.set_text_content(Some(label));
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Sprite Chase starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let app = Rc::new(RefCell::new(App {
            session: GameSession::new(),
            settings: Settings::default(),
            renderer: DomRenderer::new(&document)?,
            music: MusicPlayer::new(element::<HtmlAudioElement>(&document, "game-audio")?),
            game_area: element(&document, "game-area")?,
            pause_btn: element(&document, "pause-btn")?,
            loop_running: false,
        }));

        setup_controls(&document, app.clone())?;
        setup_keyboard(&window, app.clone())?;
        setup_cosmetics(&document, app)?;

        log::info!("Sprite Chase ready");
        Ok(())
    }

    fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?
            .dyn_into::<T>()
            .map_err(|_| JsValue::from_str(&format!("#{} has unexpected type", id)))
    }

    fn listen(
        target: &EventTarget,
        event: &str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_controls(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let difficulty: HtmlSelectElement = element(document, "difficulty")?;

        // Start
        {
            let app = app.clone();
            let start_btn: HtmlElement = element(document, "start-btn")?;
            listen(&start_btn, "click", move |_| {
                let level = difficulty.value().trim().parse::<i64>().unwrap_or(0);
                let started = {
                    let mut a = app.borrow_mut();
                    a.settings.select_difficulty(level);
                    a.session.select_difficulty(level);
                    let area = a.play_area();
                    let started = a.session.start(&area);
                    a.flush();
                    a.update_pause_label();
                    started
                };
                if started {
                    ensure_loop(&app);
                }
            })?;
        }

        // Pause / resume
        {
            let pause_btn = app.borrow().pause_btn.clone();
            listen(&pause_btn, "click", move |_| {
                {
                    let mut a = app.borrow_mut();
                    if !a.session.toggle_pause() {
                        return;
                    }
                    a.flush();
                    a.update_pause_label();
                }
                // Resume needs the loop re-armed; no-op when pausing
                ensure_loop(&app);
            })?;
        }

        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        listen(window, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let mut a = app.borrow_mut();
            if !a.session.accepts_input() {
                return;
            }
            if let Some(dir) = Direction::from_key(&event.key()) {
                // Keep arrows from scrolling the page
                event.prevent_default();
                let area = a.play_area();
                a.session.handle_key(dir, &area);
                a.flush();
            }
        })
    }

    fn setup_cosmetics(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Background color
        {
            let app = app.clone();
            let input: HtmlInputElement = element(document, "background-color")?;
            let source = input.clone();
            listen(&input, "input", move |_| {
                let mut a = app.borrow_mut();
                a.settings.background_color = source.value();
                if let Err(e) = a
                    .game_area
                    .style()
                    .set_property("background-color", &a.settings.background_color)
                {
                    log::warn!("Failed to set background: {:?}", e);
                }
            })?;
        }

        // Player character
        {
            let app = app.clone();
            let select: HtmlSelectElement = element(document, "player-character")?;
            let source = select.clone();
            listen(&select, "change", move |_| {
                let mut a = app.borrow_mut();
                a.settings.player_skin = CharacterSkin::from_value(&source.value());
                if let Err(e) = a.renderer.set_player_skin(&a.settings.player_skin) {
                    log::warn!("Failed to set player skin: {:?}", e);
                }
            })?;
        }

        // Adversary character
        {
            let app = app.clone();
            let select: HtmlSelectElement = element(document, "enemy-character")?;
            let source = select.clone();
            listen(&select, "change", move |_| {
                let mut a = app.borrow_mut();
                a.settings.adversary_image = source.value();
                if let Err(e) = a.renderer.set_adversary_image(&a.settings.adversary_image) {
                    log::warn!("Failed to set adversary image: {:?}", e);
                }
            })?;
        }

        // Music track
        {
            let app = app.clone();
            let select: HtmlSelectElement = element(document, "music-track")?;
            let source = select.clone();
            listen(&select, "change", move |_| {
                let mut a = app.borrow_mut();
                a.settings.music_track = source.value();
                let playing = a.session.state == SessionState::Playing;
                a.music.set_track(&a.settings.music_track, playing);
            })?;
        }

        // Dark mode
        {
            let checkbox: HtmlInputElement = element(document, "dark-mode")?;
            let source = checkbox.clone();
            let body = document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?;
            listen(&checkbox, "change", move |_| {
                let mut a = app.borrow_mut();
                a.settings.dark_mode = source.checked();
                let _ = body
                    .class_list()
                    .toggle_with_force("dark-mode", a.settings.theme_class().is_some());
            })?;
        }

        Ok(())
    }

    /// Schedule a frame unless one is already pending or the session is inert
    fn ensure_loop(app: &Rc<RefCell<App>>) {
        let should_schedule = {
            let mut a = app.borrow_mut();
            if a.loop_running || !a.session.accepts_input() {
                false
            } else {
                a.loop_running = true;
                true
            }
        };
        if should_schedule {
            request_animation_frame(app.clone());
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let outcome = {
            let mut a = app.borrow_mut();
            let area = a.play_area();
            let outcome = a.session.tick(&area);
            a.flush();
            if outcome != TickOutcome::Continue {
                a.loop_running = false;
            }
            outcome
        };

        match outcome {
            TickOutcome::Continue => request_animation_frame(app),
            TickOutcome::RoundEnded => prompt_round_end(app),
            TickOutcome::Halted => {}
        }
    }

    /// Ask "try again?" off the frame loop, then resolve the round
    fn prompt_round_end(app: Rc<RefCell<App>>) {
        wasm_bindgen_futures::spawn_local(async move {
            let restart = web_sys::window()
                .and_then(|w| w.confirm_with_message("Caught! Try again?").ok())
                .unwrap_or(false);
            let decision = if restart {
                RoundDecision::Restart
            } else {
                RoundDecision::Stop
            };

            {
                let mut a = app.borrow_mut();
                let area = a.play_area();
                a.session.resolve_round(decision, &area);
                a.flush();
                a.update_pause_label();
            }
            ensure_loop(&app);
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().inspect_err(|e| log::error!("Startup failed: {:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sprite Chase (native) starting...");
    log::info!("Native mode runs a headless round - run with `trunk serve` for the web version");

    let difficulty = std::env::args()
        .nth(1)
        .and_then(|arg| sprite_chase::Difficulty::from_str(&arg))
        .unwrap_or_default();
    headless::run(difficulty, headless::MAX_FRAMES);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use sprite_chase::Difficulty;
    use sprite_chase::renderer::{LogRenderer, apply_events};
    use sprite_chase::sim::{
        Direction, GameSession, PlayArea, RoundDecision, SessionState, TickOutcome,
    };

    /// Give up after a minute of 60 Hz frames
    pub const MAX_FRAMES: u64 = 60 * 60;
    /// The scripted player presses a key this often
    const KEY_INTERVAL: u64 = 12;

    /// Step away from the adversary along whichever axis it is closest on,
    /// falling back to the other axis when the edge guard refuses
    fn evade(session: &mut GameSession, area: &PlayArea) {
        let away = session.player - session.adversary;
        let horizontal = if away.x >= 0.0 {
            Direction::Right
        } else {
            Direction::Left
        };
        let vertical = if away.y >= 0.0 {
            Direction::Down
        } else {
            Direction::Up
        };
        let (first, second) = if away.x.abs() < away.y.abs() {
            (horizontal, vertical)
        } else {
            (vertical, horizontal)
        };
        if !session.handle_key(first, area) {
            session.handle_key(second, area);
        }
    }

    pub fn run(difficulty: Difficulty, max_frames: u64) {
        let area = PlayArea::new(800.0, 600.0);
        let mut renderer = LogRenderer::default();
        let mut session = GameSession::new();

        session.select_difficulty(difficulty.level());
        session.start(&area);

        let mut outcome = TickOutcome::Continue;
        let mut total_frames = 0;
        while outcome == TickOutcome::Continue && total_frames < max_frames {
            if total_frames % KEY_INTERVAL == 0 {
                evade(&mut session, &area);
            }
            outcome = session.tick(&area);
            total_frames += 1;
            apply_events(&mut renderer, &session.drain_events());
        }

        match outcome {
            TickOutcome::RoundEnded => {
                session.resolve_round(RoundDecision::Stop, &area);
            }
            _ => {
                log::info!("Player survived {} frames", total_frames);
                session.stop();
            }
        }
        apply_events(&mut renderer, &session.drain_events());

        debug_assert_eq!(session.state, SessionState::Ended);
        log::info!(
            "Headless round finished: {} frames, {} position updates",
            total_frames,
            renderer.updates
        );
        match serde_json::to_string(&session) {
            Ok(json) => log::info!("Final session: {}", json),
            Err(e) => log::error!("Failed to serialize session: {}", e),
        }
    }
}
