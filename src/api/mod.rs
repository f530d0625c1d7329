//! Canvas input WASM API
//!
//! JavaScript-facing functions for key routing and the note-input pad.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, JS (de)serialization, error conversion
//! - `bridge`: JS objects for the edited element and the editor
//! - `keys`: key routing and named edit commands
//! - `pad`: note-input pad registry and input state reflection

pub mod helpers;
pub mod bridge;
pub mod keys;
pub mod pad;

pub use keys::{route_key, route_dom_key, edit_command, set_router_config, set_router_config_json};
pub use pad::{init_action_registry, reflect_input_state, get_action, set_ui_mode};
