//! Browser client for Pong
//!
//! Canvas 2D rendering, keyboard listeners and `requestAnimationFrame`
//! scheduling around the `game_core` frame driver. All game rules live in
//! `game_core`; this crate only moves keys in and rectangles out.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use game_core::{Config, FrameDriver, KeyBindings, RunHandle, SharedKeyQueue};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent, Window};

    use crate::canvas::{CanvasSurface, ElementScore};
    use crate::input::{handle_key, is_game_key};

    type Driver = FrameDriver<CanvasSurface, ElementScore>;
    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

    /// Handles to the game currently on the page
    struct ActiveGame {
        run: RunHandle,
        queue: SharedKeyQueue,
        keys: KeyBindings,
    }

    thread_local! {
        static ACTIVE: RefCell<Option<ActiveGame>> = const { RefCell::new(None) };
        static LISTENERS_INSTALLED: Cell<bool> = const { Cell::new(false) };
    }

    fn window() -> Result<Window, JsValue> {
        web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
    }

    fn document(window: &Window) -> Result<Document, JsValue> {
        window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))
    }

    fn request_animation_frame(
        window: &Window,
        callback: &FrameCallback,
    ) -> Result<(), JsValue> {
        if let Some(closure) = callback.borrow().as_ref() {
            window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    /// Start a game on the canvas `canvas_id`, writing the score into
    /// `score_id`. Any game already running is stopped first.
    #[wasm_bindgen]
    pub fn start_game(canvas_id: &str, score_id: &str) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // Fails harmlessly if a previous game already installed the logger
        let _ = console_log::init_with_level(log::Level::Info);

        stop_game();

        let window = window()?;
        let document = document(&window)?;
        let surface = CanvasSurface::from_id(&document, canvas_id)?;
        let display = ElementScore::from_id(&document, score_id)?;

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let driver = Driver::for_surface(surface, display, Config::new(), seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Pong starting with seed {}", seed);

        install_key_listeners(&document)?;
        let game = ActiveGame {
            run: driver.run_handle(),
            queue: driver.key_queue(),
            keys: driver.sim().config.keys.clone(),
        };
        ACTIVE.with(|slot| *slot.borrow_mut() = Some(game));

        start_frame_loop(window, driver)
    }

    /// Stop the running game, if any. The loop exits on its next frame.
    #[wasm_bindgen]
    pub fn stop_game() {
        ACTIVE.with(|slot| {
            if let Some(game) = slot.borrow_mut().take() {
                game.run.stop();
                log::info!("Pong stopped");
            }
        });
    }

    /// Route document key events to whichever game is active. Installed once
    /// per page.
    fn install_key_listeners(document: &Document) -> Result<(), JsValue> {
        if LISTENERS_INSTALLED.with(Cell::get) {
            return Ok(());
        }
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                ACTIVE.with(|slot| {
                    if let Some(game) = slot.borrow().as_ref() {
                        let key = event.key();
                        if is_game_key(&key, &game.keys) {
                            event.prevent_default();
                        }
                        handle_key(&game.queue, &key, pressed);
                    }
                });
            });
            document.add_event_listener_with_callback(
                event_name,
                listener.as_ref().unchecked_ref(),
            )?;
            // Listeners live as long as the page
            listener.forget();
        }
        LISTENERS_INSTALLED.with(|installed| installed.set(true));
        Ok(())
    }

    fn start_frame_loop(window: Window, driver: Driver) -> Result<(), JsValue> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let next = Rc::clone(&callback);
        let frame_window = window.clone();
        let mut driver = driver;

        *callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            if !driver.is_running() {
                // Drop our own closure so the driver is released
                let _ = next.borrow_mut().take();
                return;
            }
            driver.frame();
            if let Err(e) = request_animation_frame(&frame_window, &next) {
                log::error!("Failed to schedule frame: {:?}", e);
            }
        }));

        request_animation_frame(&window, &callback)
    }
}
