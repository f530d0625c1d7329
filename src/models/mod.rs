//! Models module for canvas key routing
//!
//! Key events, geometry, durations, input state and edit target kinds.

pub mod keys;
pub mod geometry;
pub mod duration;
pub mod input_state;
pub mod target;

// Re-export commonly used types
pub use keys::{Key, KeyEvent, KeyEventKind, Modifiers, Platform};
pub use geometry::{Point, Rect};
pub use duration::DurationType;
pub use input_state::{BeamMode, InputState, NoteType, StaffGroup};
pub use target::TargetKind;
