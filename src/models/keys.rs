//! Key events as delivered by the canvas
//!
//! A toolkit-neutral view of a keystroke: which key, press or release,
//! which modifiers were held, and the literal text the keystroke produced.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Keys the router distinguishes. Everything else arrives as `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Space,
    Left,
    Right,
    Up,
    Down,
    Return,
    /// Plain Tab. Kept apart from `Backtab` so Shift+Tab can be told apart.
    Tab,
    Backtab,
    Control,
    Alt,
    Shift,
    CapsLock,
    /// Any other key, identified by its character code ("-" and "_" included,
    /// lyrics go by the event text instead), or 0 for unnamed keys
    Other(u32),
}

impl Key {
    /// True for the four arrow keys
    pub fn is_arrow(&self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::Up | Key::Down)
    }

    /// True for keys that are modifiers on their own
    pub fn is_modifier_key(&self) -> bool {
        matches!(self, Key::Control | Key::Alt | Key::Shift | Key::CapsLock)
    }

    /// Map a DOM `KeyboardEvent.key` value onto a `Key`.
    ///
    /// Browsers report Shift+Tab as "Tab" with the shift flag set, so the
    /// modifiers decide between `Tab` and `Backtab`.
    pub fn from_dom(key: &str, modifiers: Modifiers) -> Self {
        match key {
            "Tab" if modifiers.contains(Modifiers::SHIFT) => Key::Backtab,
            " " | "Spacebar" => Key::Space,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "Enter" => Key::Return,
            "Tab" => Key::Tab,
            "Control" => Key::Control,
            "Alt" => Key::Alt,
            "Shift" => Key::Shift,
            "CapsLock" => Key::CapsLock,
            other => Key::Other(single_char(other).map(|c| c as u32).unwrap_or(0)),
        }
    }
}

/// The character of a one-character DOM key value ("a", "-", " ")
fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

bitflags::bitflags! {
    /// Modifier keys held while the event was generated.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

// Crosses the JS boundary as the raw bit pattern
impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Modifiers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Ok(Modifiers::from_bits_truncate(bits))
    }
}

/// Press or release
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEventKind {
    Press,
    Release,
}

impl Default for KeyEventKind {
    fn default() -> Self {
        KeyEventKind::Press
    }
}

/// Host platform. Decides which modifier acts as the text accelerator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Windows,
    Linux,
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Linux
    }
}

impl Platform {
    /// Modifier that suppresses text shortcuts (Space, "-", "_") in lyrics,
    /// chord symbols and figured bass. Alt on macOS, Control elsewhere.
    pub fn accelerator(&self) -> Modifiers {
        match self {
            Platform::Mac => Modifiers::ALT,
            Platform::Windows | Platform::Linux => Modifiers::CONTROL,
        }
    }
}

/// One keystroke
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    #[serde(default)]
    pub kind: KeyEventKind,
    pub key: Key,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Literal text produced by the keystroke (may be empty)
    #[serde(default)]
    pub text: String,
}

impl KeyEvent {
    pub fn press(key: Key, modifiers: Modifiers, text: &str) -> Self {
        Self {
            kind: KeyEventKind::Press,
            key,
            modifiers,
            text: text.to_string(),
        }
    }

    pub fn release(key: Key, modifiers: Modifiers) -> Self {
        Self {
            kind: KeyEventKind::Release,
            key,
            modifiers,
            text: String::new(),
        }
    }

    /// Build an event from the fields of a DOM `KeyboardEvent`.
    ///
    /// `event_type` is "keydown" or "keyup". Printable keys carry their
    /// character as text; named keys ("ArrowLeft", "Tab") carry none.
    pub fn from_dom(event_type: &str, key: &str, modifiers: Modifiers) -> Self {
        let code = Key::from_dom(key, modifiers);
        if event_type == "keyup" {
            return Self::release(code, modifiers);
        }
        let text = single_char(key).map(String::from).unwrap_or_default();
        Self::press(code, modifiers, &text)
    }

    pub fn is_release(&self) -> bool {
        self.kind == KeyEventKind::Release
    }

    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// True if the platform accelerator is among the held modifiers
    pub fn has_accelerator(&self, platform: Platform) -> bool {
        self.modifiers.intersects(platform.accelerator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerator_per_platform() {
        assert_eq!(Platform::Mac.accelerator(), Modifiers::ALT);
        assert_eq!(Platform::Linux.accelerator(), Modifiers::CONTROL);

        let ev = KeyEvent::press(Key::Space, Modifiers::ALT, " ");
        assert!(ev.has_accelerator(Platform::Mac));
        assert!(!ev.has_accelerator(Platform::Windows));
    }

    #[test]
    fn test_dom_key_mapping() {
        let none = Modifiers::empty();
        assert_eq!(Key::from_dom(" ", none), Key::Space);
        assert_eq!(Key::from_dom("ArrowLeft", none), Key::Left);
        assert_eq!(Key::from_dom("_", Modifiers::SHIFT), Key::Other('_' as u32));
        assert_eq!(Key::from_dom("a", none), Key::Other('a' as u32));
        assert_eq!(Key::from_dom("Escape", none), Key::Other(0));
        assert!(Key::from_dom("CapsLock", none).is_modifier_key());
    }

    #[test]
    fn test_dom_shift_tab_is_backtab() {
        assert_eq!(Key::from_dom("Tab", Modifiers::empty()), Key::Tab);
        assert_eq!(Key::from_dom("Tab", Modifiers::SHIFT), Key::Backtab);
        assert_eq!(Key::from_dom("Tab", Modifiers::CONTROL), Key::Tab);
    }

    #[test]
    fn test_dom_event_fields() {
        let ev = KeyEvent::from_dom("keydown", "-", Modifiers::empty());
        assert_eq!(ev, KeyEvent::press(Key::Other('-' as u32), Modifiers::empty(), "-"));

        let ev = KeyEvent::from_dom("keydown", "ArrowRight", Modifiers::CONTROL);
        assert_eq!(ev.key, Key::Right);
        assert!(ev.text.is_empty());

        let ev = KeyEvent::from_dom("keyup", "a", Modifiers::SHIFT);
        assert!(ev.is_release());
        assert_eq!(ev.key, Key::Other('a' as u32));
        assert!(ev.text.is_empty());
    }

    #[test]
    fn test_event_deserializes_with_defaults() {
        let ev: KeyEvent = serde_json::from_str(r#"{"key":"right"}"#).unwrap();
        assert_eq!(ev.kind, KeyEventKind::Press);
        assert_eq!(ev.key, Key::Right);
        assert!(ev.modifiers.is_empty());
        assert!(ev.text.is_empty());
    }
}
