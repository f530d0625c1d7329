//! Note-input pad toggle actions
//!
//! Every pad button is an `ActionId`. The string names are what the UI
//! uses to find its buttons; inside the crate only the enum is used.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::InputError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionId {
    PadRest,
    PadDot,
    PadDotDot,
    PadDot3,
    PadDot4,
    NoteLonga,
    NoteBreve,
    PadNote1,
    PadNote2,
    PadNote4,
    PadNote8,
    PadNote16,
    PadNote32,
    PadNote64,
    PadNote128,
    PadNote256,
    Voice1,
    Voice2,
    Voice3,
    Voice4,
    Acciaccatura,
    Appoggiatura,
    Grace4,
    Grace16,
    Grace32,
    Grace8After,
    Grace16After,
    Grace32After,
    BeamStart,
    BeamMid,
    NoBeam,
    Beam32,
    AutoBeam,
}

impl ActionId {
    pub const COUNT: usize = 33;

    pub const ALL: [ActionId; ActionId::COUNT] = [
        ActionId::PadRest,
        ActionId::PadDot,
        ActionId::PadDotDot,
        ActionId::PadDot3,
        ActionId::PadDot4,
        ActionId::NoteLonga,
        ActionId::NoteBreve,
        ActionId::PadNote1,
        ActionId::PadNote2,
        ActionId::PadNote4,
        ActionId::PadNote8,
        ActionId::PadNote16,
        ActionId::PadNote32,
        ActionId::PadNote64,
        ActionId::PadNote128,
        ActionId::PadNote256,
        ActionId::Voice1,
        ActionId::Voice2,
        ActionId::Voice3,
        ActionId::Voice4,
        ActionId::Acciaccatura,
        ActionId::Appoggiatura,
        ActionId::Grace4,
        ActionId::Grace16,
        ActionId::Grace32,
        ActionId::Grace8After,
        ActionId::Grace16After,
        ActionId::Grace32After,
        ActionId::BeamStart,
        ActionId::BeamMid,
        ActionId::NoBeam,
        ActionId::Beam32,
        ActionId::AutoBeam,
    ];

    /// Name the UI registers the button under
    pub fn name(&self) -> &'static str {
        match self {
            ActionId::PadRest => "pad-rest",
            ActionId::PadDot => "pad-dot",
            ActionId::PadDotDot => "pad-dotdot",
            ActionId::PadDot3 => "pad-dot3",
            ActionId::PadDot4 => "pad-dot4",
            ActionId::NoteLonga => "note-longa",
            ActionId::NoteBreve => "note-breve",
            ActionId::PadNote1 => "pad-note-1",
            ActionId::PadNote2 => "pad-note-2",
            ActionId::PadNote4 => "pad-note-4",
            ActionId::PadNote8 => "pad-note-8",
            ActionId::PadNote16 => "pad-note-16",
            ActionId::PadNote32 => "pad-note-32",
            ActionId::PadNote64 => "pad-note-64",
            ActionId::PadNote128 => "pad-note-128",
            ActionId::PadNote256 => "pad-note-256",
            ActionId::Voice1 => "voice-1",
            ActionId::Voice2 => "voice-2",
            ActionId::Voice3 => "voice-3",
            ActionId::Voice4 => "voice-4",
            ActionId::Acciaccatura => "acciaccatura",
            ActionId::Appoggiatura => "appoggiatura",
            ActionId::Grace4 => "grace4",
            ActionId::Grace16 => "grace16",
            ActionId::Grace32 => "grace32",
            ActionId::Grace8After => "grace8after",
            ActionId::Grace16After => "grace16after",
            ActionId::Grace32After => "grace32after",
            ActionId::BeamStart => "beam-start",
            ActionId::BeamMid => "beam-mid",
            ActionId::NoBeam => "no-beam",
            ActionId::Beam32 => "beam32",
            ActionId::AutoBeam => "auto-beam",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for ActionId {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionId::ALL
            .iter()
            .find(|id| id.name() == s)
            .copied()
            .ok_or_else(|| InputError::UnknownAction(s.to_string()))
    }
}

impl Serialize for ActionId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ActionId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Checked / enabled state of one pad button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleAction {
    pub checked: bool,
    pub enabled: bool,
}

impl Default for ToggleAction {
    fn default() -> Self {
        Self {
            checked: false,
            enabled: true,
        }
    }
}

/// One `ToggleAction` per `ActionId`, all present from construction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRegistry {
    actions: [ToggleAction; ActionId::COUNT],
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: [ToggleAction::default(); ActionId::COUNT],
        }
    }

    pub fn get(&self, id: ActionId) -> ToggleAction {
        self.actions[id.index()]
    }

    pub fn set_checked(&mut self, id: ActionId, checked: bool) {
        self.actions[id.index()].checked = checked;
    }

    pub fn set_enabled(&mut self, id: ActionId, enabled: bool) {
        self.actions[id.index()].enabled = enabled;
    }

    /// Actions whose state differs in `other`, in `ActionId` order
    pub fn diff(&self, other: &ActionRegistry) -> Vec<ActionId> {
        ActionId::ALL
            .iter()
            .copied()
            .filter(|id| self.get(*id) != other.get(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (i, id) in ActionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i, "{:?} out of order", id);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for id in ActionId::ALL {
            assert_eq!(id.name().parse::<ActionId>().unwrap(), id);
        }
        assert_eq!(
            "pad-dot5".parse::<ActionId>().unwrap_err(),
            InputError::UnknownAction("pad-dot5".to_string())
        );
    }

    #[test]
    fn test_new_registry_is_enabled_and_unchecked() {
        let registry = ActionRegistry::new();
        for id in ActionId::ALL {
            assert_eq!(registry.get(id), ToggleAction { checked: false, enabled: true });
        }
    }

    #[test]
    fn test_diff_lists_changed_actions() {
        let before = ActionRegistry::new();
        let mut after = before.clone();
        after.set_checked(ActionId::Voice2, true);
        after.set_enabled(ActionId::PadDot4, false);
        assert_eq!(before.diff(&after), vec![ActionId::PadDot4, ActionId::Voice2]);
        assert!(after.diff(&after).is_empty());
    }
}
