//! Note-input pad: toggle actions and their sync with the input state

pub mod actions;
pub mod reflect;

pub use actions::{ActionId, ActionRegistry, ToggleAction};
pub use reflect::{reflect, PadRefresh, PadState, UiMode};
