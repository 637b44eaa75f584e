// Browser-only smoke test; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_game_fails_cleanly_without_page_markup() {
    // a bare test page has no #plinko-canvas
    assert!(plinko_drop::start_game().is_err());
}
