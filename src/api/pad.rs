//! WASM API for the note-input pad
//!
//! The pad lives in WASM for the whole session. The editor calls
//! `reflectInputState` after every command that may change the input state
//! and updates the buttons listed in `changed`.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, js_error, serialize};
use crate::models::InputState;
use crate::pad::{reflect, ActionId, PadState, UiMode};
use crate::wasm_info;

lazy_static! {
    static ref PAD: Mutex<PadState> = Mutex::new(PadState::default());
}

fn lock_pad() -> Result<MutexGuard<'static, PadState>, JsValue> {
    PAD.lock()
        .map_err(|e| js_error(format!("Failed to lock pad: {}", e)))
}

/// Reset every pad button to unchecked / enabled and the mode to normal
#[wasm_bindgen(js_name = initActionRegistry)]
pub fn init_action_registry() -> Result<(), JsValue> {
    *lock_pad()? = PadState::default();
    wasm_info!("Pad initialized with {} actions", ActionId::COUNT);
    Ok(())
}

/// Mirror the document's input state onto the pad
///
/// # Returns
/// `{ mode, changed: [action names], shadowNote }`
#[wasm_bindgen(js_name = reflectInputState)]
pub fn reflect_input_state(state_js: JsValue) -> Result<JsValue, JsValue> {
    let state: InputState = deserialize(state_js, "Invalid input state")?;
    let refresh = {
        let mut pad = lock_pad()?;
        reflect(&state, &mut pad)
    };
    serialize(&refresh, "Serialization error")
}

/// Look up a pad button by name
///
/// # Returns
/// `{ checked, enabled }`
#[wasm_bindgen(js_name = getAction)]
pub fn get_action(name: &str) -> Result<JsValue, JsValue> {
    let id: ActionId = name.parse().map_err(js_error)?;
    let action = lock_pad()?.actions.get(id);
    serialize(&action, "Serialization error")
}

/// Tell the pad which mode the editor is in (edit, play, ...)
#[wasm_bindgen(js_name = setUiMode)]
pub fn set_ui_mode(mode_js: JsValue) -> Result<(), JsValue> {
    let mode: UiMode = deserialize(mode_js, "Invalid UI mode")?;
    lock_pad()?.mode = mode;
    Ok(())
}
