//! Level Dash core crate.
//!
//! A side-scroller where a square jumps over obstacles while levels get faster
//! and longer. The simulation (`engine`) is plain Rust and runs natively; `web`
//! binds it to a canvas, a couple of DOM elements and `requestAnimationFrame`.

use wasm_bindgen::prelude::*;

// Browser console logging; compiled out on native targets so the engine can be
// exercised by plain `cargo test`.
macro_rules! console_log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!($($t)*)));
        #[cfg(not(target_arch = "wasm32"))]
        let _ = || format!($($t)*);
    }};
}

pub mod config;
pub mod engine;
pub mod level;
pub mod rng;
pub mod surface;
mod web;

pub use config::{ConfigError, ConfigResult, GameConfig};
pub use engine::{GAME_OVER_MESSAGE, GameEngine, Obstacle, Player, Rect, Viewport};
pub use level::LevelParams;
pub use rng::{OsRandom, RandomSource, SeededRandom};
pub use surface::Surface;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Boot the game with the classic tuning.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::launch(GameConfig::default())
}

/// Boot the game with a JSON configuration; omitted keys keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(config_json)?;
    web::launch(config)
}
