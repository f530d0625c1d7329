//! Edit-mode key handling
//!
//! - `router`: dispatch of key events for the element in edit mode
//! - `lyrics`: lyric syllable navigation
//! - `nudge`: arrow-key step sizes and raster snapping
//! - `session`: per-keystroke edit record
//! - `host`: traits for the edited element and the surrounding editor

pub mod host;
pub mod lyrics;
pub mod nudge;
pub mod router;
pub mod session;

pub use host::{EditHost, EditTarget, Transaction};
pub use nudge::{NudgeSteps, Raster};
pub use router::{EditCommand, KeyRouter, RouteOutcome};
pub use session::EditSession;
