mod api;
mod app;
mod components;
mod models;
mod pages;
mod state;
mod storage;
mod todo;
mod util;
mod widgets;

use crate::app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::{EnvConfig, DEFAULT_API_URL};
    use crate::storage::{load_last_board, write_last_board, LAST_BOARD_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear_last_board() {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(LAST_BOARD_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn test_last_board_storage_roundtrip() {
        clear_last_board();
        assert!(load_last_board().is_none());

        write_last_board("board-2");
        assert_eq!(load_last_board().as_deref(), Some("board-2"));

        // Blank ids never overwrite the stored board.
        write_last_board("  ");
        assert_eq!(load_last_board().as_deref(), Some("board-2"));

        clear_last_board();
        assert!(load_last_board().is_none());
    }

    #[wasm_bindgen_test]
    fn test_env_config_defaults_without_window_env() {
        assert_eq!(EnvConfig::new().api_url, DEFAULT_API_URL);
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
