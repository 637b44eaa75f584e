//! Plinko Drop core crate.
//!
//! The board-state endpoint decides where the ball goes and returns the
//! left/right moves; this crate turns those moves into peg waypoints
//! (`path`) and plays the drop on a canvas (`animation`, `view`). Everything
//! except the `web` adapter is plain Rust and runs under native `cargo test`.

use wasm_bindgen::prelude::*;

pub mod animation;
pub mod config;
pub mod drop_request;
pub mod error;
pub mod geometry;
pub mod path;
pub mod render;
pub mod view;
mod web;

pub use animation::{
    AnimationState, AnimationToken, AudioCues, Silent, TickOutcome, ease, frames_per_segment,
};
pub use config::{GameConfig, validate_speed};
pub use drop_request::{DropOutcome, DropRequest, DropResult, parse_response};
pub use error::{ConfigError, DropError, MovesError};
pub use geometry::{BoardGeometry, Point};
pub use path::{MoveSequence, Path, build_path, landing_column};
pub use render::{CircleStyle, Surface};
pub use view::GameView;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Draws the board and wires the page's controls using the stock element ids.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())
}

/// Same as `start_game`, overriding any `GameConfig` keys present in `json`.
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    web::start(GameConfig::from_json(json)?)
}

/// Animates a move sequence the caller already has (e.g. from its own fetch).
#[wasm_bindgen]
pub fn animate_moves(moves: Vec<i32>) -> Result<(), JsValue> {
    web::animate_moves(moves.into_iter().map(i64::from).collect::<Vec<_>>().into())
}

/// Drops a ball along locally generated moves, without the endpoint.
#[cfg(feature = "rng")]
#[wasm_bindgen]
pub fn demo_drop() -> Result<(), JsValue> {
    web::demo_drop()
}
