//! JS-side collaborators
//!
//! The canvas passes two objects with every key event: the element in edit
//! mode and the editor that owns the document. These wrappers let the router
//! drive them through `EditTarget` and `EditHost`.

use wasm_bindgen::prelude::*;

use super::helpers::to_js_or_null;
use crate::edit::{EditHost, EditSession, EditTarget};
use crate::models::{Rect, TargetKind};
use crate::wasm_warn;

#[wasm_bindgen]
extern "C" {
    /// Element in edit mode, as seen from JS
    pub type JsEditTarget;

    #[wasm_bindgen(method, js_name = kind)]
    fn js_kind(this: &JsEditTarget) -> String;

    #[wasm_bindgen(method, js_name = spatium)]
    fn js_spatium(this: &JsEditTarget) -> f64;

    #[wasm_bindgen(method, js_name = edit)]
    fn js_edit(this: &JsEditTarget, session: JsValue) -> bool;

    #[wasm_bindgen(method, js_name = startEditDrag)]
    fn js_start_edit_drag(this: &JsEditTarget, session: JsValue);

    #[wasm_bindgen(method, js_name = editDrag)]
    fn js_edit_drag(this: &JsEditTarget, session: JsValue);

    #[wasm_bindgen(method, js_name = endEditDrag)]
    fn js_end_edit_drag(this: &JsEditTarget, session: JsValue);

    #[wasm_bindgen(method, js_name = grips)]
    fn js_grips(this: &JsEditTarget) -> JsValue;

    #[wasm_bindgen(method, js_name = currentGrip)]
    fn js_current_grip(this: &JsEditTarget) -> Option<u32>;

    #[wasm_bindgen(method, js_name = endHexState)]
    fn js_end_hex_state(this: &JsEditTarget);

    #[wasm_bindgen(method, js_name = inPreedit)]
    fn js_in_preedit(this: &JsEditTarget) -> bool;
}

#[wasm_bindgen]
extern "C" {
    /// Editor around the canvas, as seen from JS
    pub type JsEditHost;

    #[wasm_bindgen(method, js_name = startCmd)]
    fn js_start_cmd(this: &JsEditHost);

    #[wasm_bindgen(method, js_name = endCmd)]
    fn js_end_cmd(this: &JsEditHost);

    #[wasm_bindgen(method, js_name = finishCommand)]
    fn js_finish_command(this: &JsEditHost);

    #[wasm_bindgen(method, js_name = update)]
    fn js_update(this: &JsEditHost);

    #[wasm_bindgen(method, js_name = updateGrips)]
    fn js_update_grips(this: &JsEditHost);

    #[wasm_bindgen(method, js_name = updateTextTools)]
    fn js_update_text_tools(this: &JsEditHost, session: JsValue);

    #[wasm_bindgen(method, js_name = imeNeedsModifiers)]
    fn js_ime_needs_modifiers(this: &JsEditHost) -> bool;

    #[wasm_bindgen(method, js_name = lyricsTab)]
    fn js_lyrics_tab(this: &JsEditHost, back: bool, end: bool, move_only: bool);

    #[wasm_bindgen(method, js_name = lyricsUpDown)]
    fn js_lyrics_up_down(this: &JsEditHost, up: bool, end: bool);

    #[wasm_bindgen(method, js_name = lyricsReturn)]
    fn js_lyrics_return(this: &JsEditHost);

    #[wasm_bindgen(method, js_name = lyricsMinus)]
    fn js_lyrics_minus(this: &JsEditHost);

    #[wasm_bindgen(method, js_name = lyricsUnderscore)]
    fn js_lyrics_underscore(this: &JsEditHost);

    #[wasm_bindgen(method, js_name = harmonyBeatsTab)]
    fn js_harmony_beats_tab(this: &JsEditHost, no_selection: bool, back: bool);

    #[wasm_bindgen(method, js_name = figuredBassTab)]
    fn js_figured_bass_tab(this: &JsEditHost, measure: bool, back: bool);
}

/// `EditTarget` backed by a JS object. The kind is read once per event.
pub struct JsTarget {
    inner: JsEditTarget,
    kind: TargetKind,
}

impl JsTarget {
    pub fn new(inner: JsEditTarget) -> Self {
        let name = inner.js_kind();
        let kind = name.parse().unwrap_or_else(|_| {
            wasm_warn!("Unknown edit target kind '{}', treating as element", name);
            TargetKind::Element
        });
        Self { inner, kind }
    }
}

impl EditTarget for JsTarget {
    fn kind(&self) -> TargetKind {
        self.kind
    }

    fn spatium(&self) -> f64 {
        self.inner.js_spatium()
    }

    fn edit(&mut self, session: &mut EditSession) -> bool {
        self.inner.js_edit(to_js_or_null(session, "edit session"))
    }

    fn start_edit_drag(&mut self, session: &mut EditSession) {
        self.inner.js_start_edit_drag(to_js_or_null(session, "edit session"));
    }

    fn edit_drag(&mut self, session: &mut EditSession) {
        self.inner.js_edit_drag(to_js_or_null(session, "edit session"));
    }

    fn end_edit_drag(&mut self, session: &mut EditSession) {
        self.inner.js_end_edit_drag(to_js_or_null(session, "edit session"));
    }

    fn grips(&self) -> Vec<Rect> {
        let value = self.inner.js_grips();
        if value.is_undefined() || value.is_null() {
            return Vec::new();
        }
        serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
            wasm_warn!("Ignoring malformed grips: {}", e);
            Vec::new()
        })
    }

    fn current_grip(&self) -> Option<usize> {
        self.inner.js_current_grip().map(|i| i as usize)
    }

    fn end_hex_state(&mut self) {
        self.inner.js_end_hex_state();
    }

    fn in_preedit(&self) -> bool {
        self.inner.js_in_preedit()
    }
}

/// `EditHost` backed by a JS object
pub struct JsHost {
    inner: JsEditHost,
}

impl JsHost {
    pub fn new(inner: JsEditHost) -> Self {
        Self { inner }
    }
}

impl EditHost for JsHost {
    fn start_cmd(&mut self) {
        self.inner.js_start_cmd();
    }

    fn end_cmd(&mut self) {
        self.inner.js_end_cmd();
    }

    fn finish_command(&mut self) {
        self.inner.js_finish_command();
    }

    fn update(&mut self) {
        self.inner.js_update();
    }

    fn update_grips(&mut self) {
        self.inner.js_update_grips();
    }

    fn update_text_tools(&mut self, session: &EditSession) {
        self.inner.js_update_text_tools(to_js_or_null(session, "edit session"));
    }

    fn ime_needs_modifiers(&self) -> bool {
        self.inner.js_ime_needs_modifiers()
    }

    fn lyrics_tab(&mut self, back: bool, end: bool, move_only: bool) {
        self.inner.js_lyrics_tab(back, end, move_only);
    }

    fn lyrics_up_down(&mut self, up: bool, end: bool) {
        self.inner.js_lyrics_up_down(up, end);
    }

    fn lyrics_return(&mut self) {
        self.inner.js_lyrics_return();
    }

    fn lyrics_minus(&mut self) {
        self.inner.js_lyrics_minus();
    }

    fn lyrics_underscore(&mut self) {
        self.inner.js_lyrics_underscore();
    }

    fn harmony_beats_tab(&mut self, no_selection: bool, back: bool) {
        self.inner.js_harmony_beats_tab(no_selection, back);
    }

    fn figured_bass_tab(&mut self, measure: bool, back: bool) {
        self.inner.js_figured_bass_tab(measure, back);
    }
}
