//! Note-entry input state, as read from the document
//!
//! The document owns this state; the pad only mirrors it.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::duration::DurationType;

/// Normal notes and the grace-note variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteType {
    Normal,
    Acciaccatura,
    Appoggiatura,
    Grace4,
    Grace16,
    Grace32,
    Grace8After,
    Grace16After,
    Grace32After,
}

impl Default for NoteType {
    fn default() -> Self {
        NoteType::Normal
    }
}

/// Beam grouping requested for the next entered note
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BeamMode {
    Auto,
    Begin,
    Mid,
    None,
    Begin32,
    Begin64,
    Invalid,
}

impl Default for BeamMode {
    fn default() -> Self {
        BeamMode::Auto
    }
}

/// Staff type family of the staff receiving input
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
pub enum StaffGroup {
    Standard = 0,
    Percussion = 1,
    Tab = 2,
}

impl Default for StaffGroup {
    fn default() -> Self {
        StaffGroup::Standard
    }
}

/// Snapshot of the document's input state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputState {
    pub duration: DurationType,
    pub dots: u8,
    /// Voice index 0..=3
    pub voice: u8,
    pub note_type: NoteType,
    pub beam_mode: BeamMode,
    pub rest: bool,
    pub note_entry_mode: bool,
    /// Staff type group at the input position
    pub staff_group: StaffGroup,
    /// False when the selection spans several elements
    pub single_selection: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            duration: DurationType::Quarter,
            dots: 0,
            voice: 0,
            note_type: NoteType::Normal,
            beam_mode: BeamMode::Auto,
            rest: false,
            note_entry_mode: false,
            staff_group: StaffGroup::Standard,
            single_selection: true,
        }
    }
}

impl InputState {
    /// Voice to show on the pad, or None if the selection is ambiguous
    pub fn pad_voice(&self) -> Option<u8> {
        if self.single_selection {
            Some(self.voice)
        } else {
            None
        }
    }
}
