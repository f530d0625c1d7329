//! WASM API for canvas key events
//!
//! The canvas calls `routeKey` (or `routeDomKey` with the raw `KeyboardEvent`
//! fields) for every keydown/keyup while an element is in edit mode and stops
//! propagation when the outcome is accepted.

use std::sync::Mutex;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use super::bridge::{JsEditHost, JsEditTarget, JsHost, JsTarget};
use super::helpers::{deserialize, js_error, serialize};
use crate::config::RouterConfig;
use crate::edit::{EditCommand, EditTarget, KeyRouter};
use crate::models::{KeyEvent, Modifiers};
use crate::wasm_info;

lazy_static! {
    static ref ROUTER: Mutex<KeyRouter> = Mutex::new(KeyRouter::default());
}

/// Snapshot of the router. Callbacks into JS run without the lock held.
fn current_router() -> Result<KeyRouter, JsValue> {
    ROUTER
        .lock()
        .map(|router| router.clone())
        .map_err(|e| js_error(format!("Failed to lock router: {}", e)))
}

/// Replace the router configuration with a JS object
#[wasm_bindgen(js_name = setRouterConfig)]
pub fn set_router_config(config_js: JsValue) -> Result<(), JsValue> {
    let config: RouterConfig = deserialize(config_js, "Invalid router configuration")?;
    install(config)
}

/// Replace the router configuration with a JSON string
#[wasm_bindgen(js_name = setRouterConfigJson)]
pub fn set_router_config_json(json: &str) -> Result<(), JsValue> {
    let config = RouterConfig::from_json(json).map_err(js_error)?;
    install(config)
}

fn install(config: RouterConfig) -> Result<(), JsValue> {
    wasm_info!("Router configured: platform={:?}, raster={:?}", config.platform, config.raster);
    let mut router = ROUTER
        .lock()
        .map_err(|e| js_error(format!("Failed to lock router: {}", e)))?;
    *router = KeyRouter::new(config);
    Ok(())
}

/// Route a key event to the element in edit mode
///
/// # Parameters
/// - `event_js`: `{ kind, key, modifiers, text }`
/// - `target`: element in edit mode, or `undefined` if none
/// - `host`: the editor
///
/// # Returns
/// `{ outcome: "handled" | "nudged" | "ignored", delta? }`
#[wasm_bindgen(js_name = routeKey)]
pub fn route_key(
    event_js: JsValue,
    target: Option<JsEditTarget>,
    host: JsEditHost,
) -> Result<JsValue, JsValue> {
    let event: KeyEvent = deserialize(event_js, "Invalid key event")?;
    dispatch(&event, target, host)
}

/// Route a key event given as DOM `KeyboardEvent` fields
///
/// # Parameters
/// - `event_type`: "keydown" or "keyup"
/// - `key`: `KeyboardEvent.key`
/// - `modifiers`: bit set, shift = 1, control = 2, alt = 4, meta = 8
///
/// Shift+Tab arrives from the DOM as "Tab" and is routed as backtab.
#[wasm_bindgen(js_name = routeDomKey)]
pub fn route_dom_key(
    event_type: &str,
    key: &str,
    modifiers: u8,
    target: Option<JsEditTarget>,
    host: JsEditHost,
) -> Result<JsValue, JsValue> {
    let event = KeyEvent::from_dom(event_type, key, Modifiers::from_bits_truncate(modifiers));
    dispatch(&event, target, host)
}

fn dispatch(event: &KeyEvent, target: Option<JsEditTarget>, host: JsEditHost) -> Result<JsValue, JsValue> {
    let router = current_router()?;

    let mut target = target.map(JsTarget::new);
    let mut host = JsHost::new(host);
    let outcome = router.route(
        event,
        target.as_mut().map(|t| t as &mut dyn EditTarget),
        &mut host,
    );

    serialize(&outcome, "Serialization error")
}

/// Forward a named edit command ("next-lyric", "prev-lyric")
///
/// # Returns
/// True if the command applied to the current target
#[wasm_bindgen(js_name = editCommand)]
pub fn edit_command(
    command: &str,
    target: Option<JsEditTarget>,
    host: JsEditHost,
) -> Result<bool, JsValue> {
    let command: EditCommand = command.parse().map_err(js_error)?;
    let router = current_router()?;

    let target = target.map(JsTarget::new);
    let mut host = JsHost::new(host);
    Ok(router.edit_command(
        command,
        target.as_ref().map(|t| t as &dyn EditTarget),
        &mut host,
    ))
}
