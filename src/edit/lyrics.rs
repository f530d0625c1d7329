//! Key handling while a lyric syllable is being edited
//!
//! Space, "-" and "_" drive syllable navigation the way singers type lyrics;
//! arrows move the caret inside the syllable and cross to the neighbouring
//! syllable at its ends.

use super::host::{EditHost, EditTarget};
use super::session::EditSession;
use crate::models::{Key, Modifiers, Platform};

/// Returns true if the key was handled. False lets generic text editing
/// have the event.
pub fn edit_key_lyrics(
    session: &mut EditSession,
    target: &mut dyn EditTarget,
    host: &mut dyn EditHost,
    platform: Platform,
) -> bool {
    let accelerator = session.modifiers.intersects(platform.accelerator());
    // Exactly Control, not Control plus something else
    let ctrl = session.modifiers == Modifiers::CONTROL;
    let shift = session.modifiers.contains(Modifiers::SHIFT);

    match session.key {
        Key::Space => {
            if accelerator {
                return false;
            }
            if session.text == "_" {
                host.lyrics_underscore();
            } else {
                host.lyrics_tab(shift, true, false);
            }
        }
        Key::Left => {
            if !ctrl && target.edit(session) {
                caret_moved(session, host);
            } else {
                host.lyrics_tab(true, true, true);
            }
        }
        Key::Right => {
            if !ctrl && target.edit(session) {
                caret_moved(session, host);
            } else {
                host.lyrics_tab(false, false, true);
            }
        }
        Key::Up => host.lyrics_up_down(true, true),
        Key::Down => host.lyrics_up_down(false, true),
        Key::Return => host.lyrics_return(),
        _ => {
            if accelerator {
                return false;
            }
            match session.text.as_str() {
                "-" => host.lyrics_minus(),
                "_" => host.lyrics_underscore(),
                _ => return false,
            }
        }
    }
    true
}

fn caret_moved(session: &EditSession, host: &mut dyn EditHost) {
    host.update_text_tools(session);
    host.update();
    host.finish_command();
}
