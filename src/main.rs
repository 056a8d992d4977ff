//! Banana Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use banana_dash::Settings;
    use banana_dash::game::Game;
    use banana_dash::hud::Hud;
    use banana_dash::input::{Action, TapDetector, action_for_key};
    use banana_dash::render::CanvasRenderer;
    use banana_dash::sim::{GameEvent, level};
    use banana_dash::storage::LocalStorageStore;

    /// Browser-side wrapper around the session
    struct App {
        game: Game<LocalStorageStore>,
        renderer: Option<CanvasRenderer>,
        settings: Settings,
        taps: TapDetector,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(seed: u64, renderer: Option<CanvasRenderer>) -> Self {
            let settings = Settings::load();
            Self {
                game: Game::new(seed, LocalStorageStore),
                renderer,
                taps: TapDetector::new(settings.double_tap_ms),
                settings,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        fn act(&mut self, action: Action) {
            match action {
                Action::Jump => self.game.jump(),
                Action::Dash => self.game.dash(),
            }
        }

        /// Advance the session and react to what happened
        fn update(&mut self, dt: f32, time: f64) {
            let events = self.game.update(dt);
            for event in &events {
                handle_event(event, self.game.best_score(), self.game.state.score);
            }

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        fn render(&self, time: f64) {
            if let Some(ref renderer) = self.renderer {
                renderer.render(&self.game.state, &self.settings, time / 1000.0);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = document() else {
                return;
            };
            let hud = Hud::from_state(&self.game.state);
            set_text(&document, "lives", &hud.lives_text());
            set_text(&document, "score", &hud.score_text());
            set_text(&document, "speed", &hud.speed_text());
            set_text(&document, "level", hud.level_name);
            if self.settings.show_fps {
                set_text(&document, "fps", &format!("{} fps", self.fps));
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn show_screen(id: &str, show: bool) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let classes = el.class_list();
            let _ = if show {
                classes.add_1("show")
            } else {
                classes.remove_1("show")
            };
        }
    }

    /// Map simulation events onto overlays
    fn handle_event(event: &GameEvent, best_score: u64, score: u64) {
        let Some(document) = document() else {
            return;
        };
        match event {
            GameEvent::RunStarted => {
                show_screen("screen-start", false);
                show_screen("screen-gameover", false);
            }
            GameEvent::LevelStarted { .. } => show_screen("screen-level", false),
            GameEvent::LevelComplete { next_level } => {
                let next = level::level(*next_level);
                set_text(&document, "levelTitle", next.name);
                set_text(&document, "levelDesc", next.description);
                show_screen("screen-level", true);
            }
            GameEvent::GameOver { .. } => {
                set_text(&document, "finalScore", &score.to_string());
                set_text(&document, "finalBest", &best_score.to_string());
                set_text(&document, "bestScore", &best_score.to_string());
                show_screen("screen-gameover", true);
            }
            _ => {}
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Banana Dash starting...");

        let document = document().expect("no document");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let renderer = CanvasRenderer::new(canvas.clone());
        if renderer.is_none() {
            log::warn!("Canvas 2D context unavailable, running without graphics");
        }

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed, renderer)));

        set_text(&document, "bestScore", &app.borrow().game.best_score().to_string());

        setup_input_handlers(&canvas, app.clone());
        setup_screen_buttons(app.clone());

        request_animation_frame(app);

        log::info!("Banana Dash running!");
    }

    fn on_click(id: &str, app: Rc<RefCell<App>>, handler: fn(&mut App)) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("Missing #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            handler(&mut app.borrow_mut());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Keyboard
        {
            let app = app.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = action_for_key(&event.code()) {
                    event.prevent_default();
                    app.borrow_mut().act(action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: tap jumps, double tap dashes
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                let mut a = app.borrow_mut();
                let action = a.taps.tap(js_sys::Date::now());
                a.act(action);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        on_click("btnJump", app.clone(), |a| a.act(Action::Jump));
        on_click("btnDash", app, |a| a.act(Action::Dash));
    }

    fn setup_screen_buttons(app: Rc<RefCell<App>>) {
        on_click("btnPlay", app.clone(), |a| a.game.start());
        on_click("btnGo", app.clone(), |a| a.game.continue_level());
        on_click("btnRestart", app, |a| a.game.restart());
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            // Calculate delta time
            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                banana_dash::consts::SIM_DT
            };
            a.last_time = time;

            a.update(dt, time);
            a.render(time);
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Banana Dash (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    attract_mode();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let a simple bot play one run and report how it went
#[cfg(not(target_arch = "wasm32"))]
fn attract_mode() {
    use banana_dash::consts::*;
    use banana_dash::game::Game;
    use banana_dash::sim::{GameEvent, GamePhase, ObstacleKind};
    use banana_dash::storage::MemoryStore;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut game = Game::new(seed, MemoryStore::new());
    game.start();

    let mut levels_cleared = 0;
    // Ten minutes of game time at most
    for _ in 0..(600 * 60) {
        let player = &game.state.player;
        let threat = game.state.obstacles.iter().find(|o| {
            let gap = o.pos.x - (player.pos.x + player.size.x);
            (0.0..60.0).contains(&gap)
        });
        match threat.map(|o| o.kind) {
            Some(ObstacleKind::Laser { .. }) => game.dash(),
            Some(_) => game.jump(),
            None => {}
        }

        for event in game.update(SIM_DT) {
            match event {
                GameEvent::LevelComplete { .. } => levels_cleared += 1,
                GameEvent::GameOver { score } => log::info!("Bot finished with {} bananas", score),
                _ => {}
            }
        }

        match game.phase() {
            GamePhase::LevelGate => game.continue_level(),
            GamePhase::GameOver => break,
            _ => {}
        }
    }

    println!(
        "Seed {}: {} levels cleared, {} bananas, {} lives left, best {}",
        seed,
        levels_cleared,
        game.state.score,
        game.state.lives,
        game.best_score()
    );
}
