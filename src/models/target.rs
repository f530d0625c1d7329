//! The kind of element currently being edited on the canvas

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::InputError;

/// Closed set of edit targets the key router knows how to serve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// A lyric syllable
    Lyrics,
    /// Chord symbol text
    Harmony,
    /// Figured bass text
    FiguredBass,
    /// Any other text element
    Text,
    /// A beam (finer nudge table)
    Beam,
    /// Any other movable element
    Element,
}

impl TargetKind {
    /// Lyrics, chord symbols and figured bass are all text underneath
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            TargetKind::Lyrics | TargetKind::Harmony | TargetKind::FiguredBass | TargetKind::Text
        )
    }

    pub fn is_beam(&self) -> bool {
        matches!(self, TargetKind::Beam)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Lyrics => "lyrics",
            TargetKind::Harmony => "harmony",
            TargetKind::FiguredBass => "figured-bass",
            TargetKind::Text => "text",
            TargetKind::Beam => "beam",
            TargetKind::Element => "element",
        }
    }
}

impl FromStr for TargetKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lyrics" => Ok(TargetKind::Lyrics),
            "harmony" => Ok(TargetKind::Harmony),
            "figured-bass" => Ok(TargetKind::FiguredBass),
            "text" => Ok(TargetKind::Text),
            "beam" => Ok(TargetKind::Beam),
            "element" => Ok(TargetKind::Element),
            other => Err(InputError::UnknownTarget(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_capability() {
        assert!(TargetKind::Lyrics.is_text());
        assert!(TargetKind::FiguredBass.is_text());
        assert!(!TargetKind::Beam.is_text());
        assert!(!TargetKind::Element.is_text());
    }

    #[test]
    fn test_parse_kind() {
        for kind in [TargetKind::Lyrics, TargetKind::Harmony, TargetKind::FiguredBass, TargetKind::Beam] {
            assert_eq!(kind.as_str().parse::<TargetKind>().unwrap(), kind);
        }
        assert!("slur".parse::<TargetKind>().is_err());
    }
}
