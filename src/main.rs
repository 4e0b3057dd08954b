//! Block Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop: one
//! simulation tick per animation frame, then a 2D canvas redraw from the
//! tick's snapshot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use block_runner::HighScore;
    use block_runner::platform::LocalStore;
    use block_runner::sim::{Config, GameEvent, GamePhase, GameState, TickInput, tick};
    use glam::Vec2;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        context: CanvasRenderingContext2d,
        store: LocalStore,
        /// Best score loaded at startup, bumped when a run beats it
        best: u64,
        new_best: bool,
    }

    impl Game {
        /// Run one frame: drain the latched input into a tick, react to the
        /// tick's events, redraw.
        fn frame(&mut self) {
            let input = self.input;
            self.input.jump = false;

            for event in tick(&mut self.state, &input) {
                match event {
                    GameEvent::GameOver { score } => {
                        self.new_best =
                            HighScore::submit(&mut self.store, score, js_sys::Date::now());
                        if self.new_best {
                            self.best = score;
                        }
                        log::info!("run ended with score {score}");
                    }
                    GameEvent::SpeedIncreased { speed } => {
                        log::debug!("scroll speed now {speed:.1}");
                    }
                    _ => {}
                }
            }

            self.render();
        }

        /// Redraw the whole field from the current snapshot
        fn render(&self) {
            let snapshot = self.state.snapshot();
            let viewport = self.state.config.viewport;
            let ctx = &self.context;

            ctx.clear_rect(0.0, 0.0, viewport.x as f64, viewport.y as f64);

            ctx.set_fill_style_str("blue");
            fill_rect(ctx, snapshot.player);

            ctx.set_fill_style_str("red");
            for obstacle in snapshot.obstacles {
                fill_rect(ctx, obstacle.rect);
            }

            ctx.set_fill_style_str("green");
            for power_up in snapshot.power_ups {
                fill_rect(ctx, power_up.rect);
            }

            // HUD text
            ctx.set_fill_style_str("black");
            ctx.set_font("20px Arial");
            ctx.set_text_align("left");
            let _ = ctx.fill_text(&format!("Score: {}", snapshot.score), 10.0, 30.0);
            let _ = ctx.fill_text(&format!("Health: {}", snapshot.health), 10.0, 60.0);
            let _ = ctx.fill_text(&format!("Best: {}", self.best), 10.0, 90.0);
            if snapshot.combo > 1 {
                let _ = ctx.fill_text(&format!("Streak: x{}", snapshot.combo), 10.0, 120.0);
            }

            if snapshot.game_over {
                self.render_game_over(snapshot.score, viewport);
            }
        }

        /// Final-score overlay; the session restarts on the next jump input
        fn render_game_over(&self, score: u64, viewport: Vec2) {
            let ctx = &self.context;
            let cx = f64::from(viewport.x) / 2.0;
            let cy = f64::from(viewport.y) / 2.0;

            ctx.set_text_align("center");
            ctx.set_fill_style_str("black");
            ctx.set_font("40px Arial");
            let _ = ctx.fill_text("Game Over", cx, cy - 30.0);

            ctx.set_font("20px Arial");
            let line = if self.new_best {
                format!("New best score: {score}!")
            } else {
                format!("Score: {score}")
            };
            let _ = ctx.fill_text(&line, cx, cy + 10.0);
            let _ = ctx.fill_text("Press Space or tap to restart", cx, cy + 40.0);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // The canvas fills the window; the size taken here seeds the
        // ground geometry for the whole session.
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);

        let canvas = document
            .get_element_by_id("canvas")
            .expect("no #canvas element")
            .dyn_into::<HtmlCanvasElement>()
            .expect("#canvas is not a canvas");
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("unexpected context type");

        let store = LocalStore::new();
        let best = HighScore::load(&store).best;

        let seed = js_sys::Date::now() as u64;
        let config = Config::new(Vec2::new(width as f32, height as f32));
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, config),
            input: TickInput::default(),
            context,
            store,
            best,
            new_best: false,
        }));

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Block Runner running (seed {seed})");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard: Space jumps, or restarts a finished run
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    handle_jump_request(&game);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: any tap jumps or restarts
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                handle_jump_request(&game);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Latch a jump for the next tick, or request a full session restart if
    /// the run is over.
    fn handle_jump_request(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        if g.state.phase == GamePhase::GameOver {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        } else {
            g.input.jump = true;
        }
    }

    fn fill_rect(ctx: &CanvasRenderingContext2d, rect: block_runner::sim::Rect) {
        ctx.fill_rect(
            f64::from(rect.left()),
            f64::from(rect.top()),
            f64::from(rect.size.x),
            f64::from(rect.size.y),
        );
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use block_runner::HighScore;
    use block_runner::platform::MemoryStore;
    use block_runner::sim::{Config, GameEvent, GameState, TickInput, tick};
    use glam::Vec2;

    env_logger::init();
    log::info!("Block Runner (native) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed, Config::new(Vec2::new(800.0, 600.0)));
    let mut store = MemoryStore::new();

    // Headless demo: jump on a fixed cadence until the run ends
    for i in 0..20_000u64 {
        let input = TickInput { jump: i % 45 == 0 };
        for event in tick(&mut state, &input) {
            if let GameEvent::GameOver { score } = event {
                println!("game over after {} ticks, score {}", state.time_ticks, score);
                HighScore::submit(&mut store, score, 0.0);
                return;
            }
        }
    }

    println!("demo finished, score {}", state.score);
}
