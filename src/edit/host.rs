//! Collaborators the router drives: the element under edit and the editor
//! that owns the document.

use std::ops::{Deref, DerefMut};

use super::session::EditSession;
use crate::models::{Rect, TargetKind};

/// The element currently in edit mode
pub trait EditTarget {
    fn kind(&self) -> TargetKind;

    /// Local spacing unit of the element
    fn spatium(&self) -> f64;

    /// Offer the keystroke as an in-place edit. Returns true if consumed.
    fn edit(&mut self, session: &mut EditSession) -> bool;

    fn start_edit_drag(&mut self, session: &mut EditSession);
    fn edit_drag(&mut self, session: &mut EditSession);
    fn end_edit_drag(&mut self, session: &mut EditSession);

    /// Grip handles currently shown for the element
    fn grips(&self) -> Vec<Rect> {
        Vec::new()
    }

    /// Index of the active grip. May be stale; callers bounds-check it.
    fn current_grip(&self) -> Option<usize> {
        None
    }

    /// Leave hex/unicode code point entry (text targets)
    fn end_hex_state(&mut self) {}

    /// True while an input method is composing into the text
    fn in_preedit(&self) -> bool {
        false
    }
}

/// The editor around the canvas: document transactions, panel refreshes and
/// the lyrics / chord symbol / figured bass navigation commands.
pub trait EditHost {
    /// Open a document transaction (one undo step)
    fn start_cmd(&mut self);
    /// Close the document transaction
    fn end_cmd(&mut self);
    /// Application-level refresh after a command (menus, palettes, status)
    fn finish_command(&mut self);

    /// Repaint the canvas
    fn update(&mut self);
    fn update_grips(&mut self);
    /// Sync the text formatting panel with the caret
    fn update_text_tools(&mut self, session: &EditSession);

    /// True if the active input method must see bare modifier keys while
    /// composing (Japanese IME on Windows, for one)
    fn ime_needs_modifiers(&self) -> bool {
        false
    }

    /// Move to the next (or previous, `back`) lyric slot
    fn lyrics_tab(&mut self, back: bool, end: bool, move_only: bool);
    /// Move to the lyric line above or below
    fn lyrics_up_down(&mut self, up: bool, end: bool);
    fn lyrics_return(&mut self);
    /// Hyphenate the syllable and advance
    fn lyrics_minus(&mut self);
    /// Extend the syllable with a melisma line
    fn lyrics_underscore(&mut self);

    fn harmony_beats_tab(&mut self, no_selection: bool, back: bool);
    fn figured_bass_tab(&mut self, measure: bool, back: bool);
}

/// Open document transaction. Closed when dropped, so every exit path
/// balances `start_cmd` with `end_cmd`.
pub struct Transaction<'a, H: EditHost + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: EditHost + ?Sized> Transaction<'a, H> {
    pub fn begin(host: &'a mut H) -> Self {
        host.start_cmd();
        Self { host }
    }
}

impl<H: EditHost + ?Sized> Deref for Transaction<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: EditHost + ?Sized> DerefMut for Transaction<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: EditHost + ?Sized> Drop for Transaction<'_, H> {
    fn drop(&mut self) {
        self.host.end_cmd();
    }
}
