//! Mirror the document's input state onto the note-input pad
//!
//! A pure projection: the pad after `reflect` depends only on the input
//! state and the UI mode, so reflecting the same state twice changes nothing.

use serde::{Deserialize, Serialize};

use super::actions::{ActionId, ActionRegistry};
use crate::models::{BeamMode, DurationType, InputState, NoteType, StaffGroup};

/// Coarse UI mode of the editor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UiMode {
    Normal,
    /// Note entry on a staff of the given group
    NoteEntry(StaffGroup),
    /// An element is in edit mode
    Edit,
    Play,
}

impl Default for UiMode {
    fn default() -> Self {
        UiMode::Normal
    }
}

impl UiMode {
    /// Modes in which the dot buttons are usable at all
    fn offers_dots(&self) -> bool {
        matches!(self, UiMode::Normal | UiMode::NoteEntry(_))
    }
}

/// The pad: its buttons plus the UI mode they are shown in
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PadState {
    pub mode: UiMode,
    pub actions: ActionRegistry,
}

/// Result of one `reflect`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PadRefresh {
    pub mode: UiMode,
    /// Buttons whose checked or enabled flag changed
    pub changed: Vec<ActionId>,
    /// The note-entry placeholder needs recomputing
    pub shadow_note: bool,
}

const DOT_ACTIONS: [ActionId; 4] = [ActionId::PadDot, ActionId::PadDotDot, ActionId::PadDot3, ActionId::PadDot4];

const DURATION_ACTIONS: [(DurationType, ActionId); 11] = [
    (DurationType::Long, ActionId::NoteLonga),
    (DurationType::Breve, ActionId::NoteBreve),
    (DurationType::Whole, ActionId::PadNote1),
    (DurationType::Half, ActionId::PadNote2),
    (DurationType::Quarter, ActionId::PadNote4),
    (DurationType::Eighth, ActionId::PadNote8),
    (DurationType::D16th, ActionId::PadNote16),
    (DurationType::D32nd, ActionId::PadNote32),
    (DurationType::D64th, ActionId::PadNote64),
    (DurationType::D128th, ActionId::PadNote128),
    (DurationType::D256th, ActionId::PadNote256),
];

const VOICE_ACTIONS: [ActionId; 4] = [ActionId::Voice1, ActionId::Voice2, ActionId::Voice3, ActionId::Voice4];

const NOTE_TYPE_ACTIONS: [(NoteType, ActionId); 8] = [
    (NoteType::Acciaccatura, ActionId::Acciaccatura),
    (NoteType::Appoggiatura, ActionId::Appoggiatura),
    (NoteType::Grace4, ActionId::Grace4),
    (NoteType::Grace16, ActionId::Grace16),
    (NoteType::Grace32, ActionId::Grace32),
    (NoteType::Grace8After, ActionId::Grace8After),
    (NoteType::Grace16After, ActionId::Grace16After),
    (NoteType::Grace32After, ActionId::Grace32After),
];

const BEAM_ACTIONS: [(BeamMode, ActionId); 5] = [
    (BeamMode::Begin, ActionId::BeamStart),
    (BeamMode::Mid, ActionId::BeamMid),
    (BeamMode::None, ActionId::NoBeam),
    (BeamMode::Begin32, ActionId::Beam32),
    (BeamMode::Auto, ActionId::AutoBeam),
];

/// Push `state` onto the pad and report what changed.
pub fn reflect(state: &InputState, pad: &mut PadState) -> PadRefresh {
    if state.note_entry_mode {
        pad.mode = UiMode::NoteEntry(state.staff_group);
    }

    let mut next = pad.actions.clone();

    next.set_checked(ActionId::PadRest, state.rest);

    let max_dots = state.duration.max_dots();
    for (i, id) in DOT_ACTIONS.iter().copied().enumerate() {
        let count = i as u8 + 1;
        if count > max_dots {
            // Not available at this value, whatever the input state says
            next.set_checked(id, false);
            next.set_enabled(id, false);
        } else {
            next.set_checked(id, state.dots == count);
            if pad.mode.offers_dots() {
                next.set_enabled(id, true);
            }
        }
    }

    for (duration, id) in DURATION_ACTIONS {
        next.set_checked(id, state.duration == duration);
    }

    let voice = state.pad_voice();
    for (i, id) in VOICE_ACTIONS.iter().copied().enumerate() {
        next.set_checked(id, voice == Some(i as u8));
    }

    for (note_type, id) in NOTE_TYPE_ACTIONS {
        next.set_checked(id, state.note_type == note_type);
    }

    for (mode, id) in BEAM_ACTIONS {
        next.set_checked(id, state.beam_mode == mode);
    }

    let changed = pad.actions.diff(&next);
    pad.actions = next;

    if !changed.is_empty() {
        log::debug!("pad refresh: {} action(s) changed", changed.len());
    }

    PadRefresh {
        mode: pad.mode,
        changed,
        shadow_note: state.note_entry_mode && !state.rest,
    }
}
