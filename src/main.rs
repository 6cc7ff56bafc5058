//! Sticker Catcher entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::{
        AddEventListenerOptions, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
        Window,
    };

    use sticker_catcher::highscores::LocalStorageStore;
    use sticker_catcher::platform::web::DomHost;
    use sticker_catcher::renderer::{CanvasSurface, Sprites};
    use sticker_catcher::{FrameClock, Game, Tuning, run_loop};

    type WebGame = Game<DomHost, CanvasSurface, LocalStorageStore>;

    /// Frame pacing from requestAnimationFrame
    struct RafClock;

    impl FrameClock for RafClock {
        async fn next_frame(&mut self) -> f64 {
            let promise = js_sys::Promise::new(&mut |resolve, _reject| {
                if let Some(window) = web_sys::window() {
                    let _ = window.request_animation_frame(&resolve);
                }
            });
            JsFuture::from(promise)
                .await
                .ok()
                .and_then(|t| t.as_f64())
                .unwrap_or(0.0)
        }
    }

    fn window_size(window: &Window) -> (u32, u32) {
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    /// Tuning overrides from `<script id="tuning" type="application/json">`
    fn load_tuning(document: &Document) -> Tuning {
        document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
            .map(|json| Tuning::from_json_or_default(&json))
            .unwrap_or_default()
    }

    /// Start a run, spawning the frame loop if none is active
    fn start_run(game: &Rc<RefCell<WebGame>>) {
        if !game.borrow_mut().start() {
            return;
        }
        let game = game.clone();
        spawn_local(async move {
            let mut clock = RafClock;
            run_loop(&*game, &mut clock).await;
        });
    }

    fn on_click(document: &Document, id: &str, mut f: impl FnMut() + 'static) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Missing button #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| f());
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Sticker Catcher starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let surface = CanvasSurface::new(canvas, Sprites::load("assets")?)?;
        let (width, height) = window_size(&window);
        surface.resize(width, height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            load_tuning(&document),
            DomHost::new(document.clone()),
            surface,
            LocalStorageStore,
            seed,
        )));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&window, game.clone());

        {
            let game = game.clone();
            on_click(&document, "start-btn", move || start_run(&game));
        }
        {
            let game = game.clone();
            on_click(&document, "restart-btn", move || start_run(&game));
        }
        on_click(&document, "mute-btn", move || {
            game.borrow_mut().toggle_mute();
        });

        Ok(())
    }

    fn setup_input_handlers(window: &Window, game: Rc<RefCell<WebGame>>) {
        // Mouse move, anywhere in the window
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().pointer_moved(event.client_x() as f32);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move, anywhere in the window; non-passive so scrolling can be suppressed
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().pointer_moved(touch.client_x() as f32);
                }
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Window resize
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else { return };
                let (width, height) = window_size(&window);
                let mut g = game.borrow_mut();
                g.surface().resize(width, height);
                g.resize(Vec2::new(width as f32, height as f32));
            });
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.key().as_str() {
                    " " | "Enter" => {
                        if !game.borrow().is_running() {
                            start_run(&game);
                        }
                    }
                    "m" | "M" => {
                        game.borrow_mut().toggle_mute();
                    }
                    "i" | "I" => {
                        game.borrow_mut().toggle_autopilot();
                    }
                    _ => {}
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Headless demo: the autopilot plays one run on a recording surface
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use sticker_catcher::platform::HeadlessHost;
    use sticker_catcher::renderer::Recorder;
    use sticker_catcher::{Game, MemoryStore, Tuning};

    /// Ten minutes at 60 fps
    const MAX_FRAMES: u32 = 60 * 60 * 10;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    env_logger::init();
    log::info!("Sticker Catcher (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let tuning = match std::env::var("STICKER_TUNING") {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read {}: {}", path, e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let mut game = Game::new(
        tuning,
        HeadlessHost::new(),
        Recorder::new(Vec2::new(800.0, 600.0)),
        MemoryStore::new(),
        seed,
    );
    game.toggle_autopilot();
    game.start();

    let mut frames = 0;
    while frames < MAX_FRAMES && game.frame(frames as f64 * FRAME_MS) {
        frames += 1;
    }

    let hud = game.hud();
    log::info!("Autopilot stopped after {} frames", frames);
    println!(
        "seed {}: score {} (high {}), lives left {}",
        seed, hud.score, hud.high_score, hud.lives
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
