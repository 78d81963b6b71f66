//! Extenso Match core crate.
//!
//! A 3x3 board shows nine numbers spelled out in Portuguese; the child drags
//! the matching numeral tiles onto them and each correct match uncovers one
//! ninth of a hidden picture. The pure parts (spelling, round generation,
//! scoring) live in `lexicon`, `round` and `session` and run natively; the
//! browser side is the `board` module.

use wasm_bindgen::prelude::*;

mod board; // DOM adapter
pub mod config;
pub mod error;
pub mod lexicon;
pub mod logger;
pub mod round;
pub mod session;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use lexicon::{words_for, words_for_number};
pub use round::{
    NumberWordPair, PlacementAssignment, ROUND_SIZE, Round, RoundGenerator, assign_placements,
    generate_round,
};
pub use session::{Cue, DropEvent, Effect, GameSession, TileCrop};

pub use board::confetti::{Bounds, Particle, scatter as scatter_confetti};
pub use board::drop_on_cell;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init_console_logger(tracing::Level::INFO);
}

// -----------------------------------------------------------------------------
// Browser entrypoints
// -----------------------------------------------------------------------------

/// Start a round with the default configuration.
#[wasm_bindgen]
pub fn start_game() -> std::result::Result<(), JsValue> {
    board::start_board_mode(GameConfig::default())
}

/// Start a round with settings from a JSON object; missing keys keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> std::result::Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    board::start_board_mode(config)
}

/// Discard the current round and deal a new one.
#[wasm_bindgen]
pub fn restart_game() -> std::result::Result<(), JsValue> {
    board::restart_board_mode()
}

/// The current round as a JSON array of `{ value, words }`, or `undefined`
/// before the first round.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn current_round_json() -> std::result::Result<Option<String>, JsValue> {
    board::current_round_json()
}

/// Spell `n` in words. Takes the raw JS number so out-of-range input is
/// reported instead of being wrapped into `0..=255`.
#[wasm_bindgen(js_name = wordsFor)]
pub fn words_for_js(n: f64) -> std::result::Result<String, JsValue> {
    Ok(words_for_number(n)?)
}
