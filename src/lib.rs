//! Canvas Input WASM Module
//!
//! Keyboard routing for the element in edit mode on the notation canvas
//! (lyrics, chord symbols, figured bass, text, arrow-key nudging) and the
//! note-input pad that mirrors the document's input state.

pub mod api;
pub mod config;
pub mod edit;
pub mod error;
pub mod models;
pub mod pad;

// Re-export commonly used types
pub use config::RouterConfig;
pub use edit::{EditCommand, EditHost, EditSession, EditTarget, KeyRouter, RouteOutcome};
pub use error::InputError;
pub use models::*;
pub use pad::{reflect, ActionId, ActionRegistry, PadRefresh, PadState, ToggleAction, UiMode};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            // Logger already installed by the embedding page
        }
    }

    log::info!("Canvas input WASM module initialized");
}
