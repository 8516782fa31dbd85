//! Browser binding
//!
//! The page owns the canvas, the sprites and `requestAnimationFrame`; it
//! forwards DOM events here and draws whatever `frame()` returns.

use wasm_bindgen::prelude::*;

use crate::format_hud;
use crate::persistence::LocalStorageStore;
use crate::platform::{FrameDriver, Key};
use crate::sim::Viewport;
use crate::tuning::Tuning;

#[wasm_bindgen]
pub struct WebGame {
    driver: FrameDriver<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game sized to the window (capped to the max field size)
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        console_error_panic_hook::set_once();
        // Already initialised when a second game is created on the same page
        let _ = console_log::init_with_level(log::Level::Info);

        let seed = js_sys::Date::now() as u64;
        log::info!("Dino Run starting (seed {})", seed);
        WebGame {
            driver: FrameDriver::new(
                seed,
                Tuning::default(),
                Viewport::new(width, height),
                LocalStorageStore::new(),
            ),
        }
    }

    /// `KeyboardEvent.code` of a keydown
    pub fn key_down(&mut self, code: &str) {
        self.driver.input_mut().key_down(Key::from_code(code));
    }

    pub fn key_up(&mut self, code: &str) {
        self.driver.input_mut().key_up(Key::from_code(code));
    }

    pub fn touch_start(&mut self) {
        self.driver.input_mut().touch_start();
    }

    pub fn touch_end(&mut self) {
        self.driver.input_mut().touch_end();
    }

    /// Window lost focus: release everything held
    pub fn blur(&mut self) {
        self.driver.input_mut().clear();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.driver.resize(width, height);
    }

    #[wasm_bindgen(getter)]
    pub fn idle_mode(&self) -> bool {
        self.driver.idle_mode
    }

    #[wasm_bindgen(setter)]
    pub fn set_idle_mode(&mut self, on: bool) {
        self.driver.idle_mode = on;
    }

    /// Advance one frame; returns the snapshot to draw as JSON
    pub fn frame(&mut self) -> String {
        self.driver.frame();
        self.snapshot()
    }

    /// Current snapshot as JSON without advancing
    pub fn snapshot(&self) -> String {
        match serde_json::to_string(&self.driver.snapshot()) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Snapshot serialization failed: {}", e);
                String::from("{}")
            }
        }
    }

    /// Score line for the HUD
    pub fn hud(&self) -> String {
        let world = self.driver.world();
        format_hud(world.high_score.best, world.score)
    }
}
