//! Key routing for the element in edit mode
//!
//! Order of precedence for a key press:
//!
//! 1. target-specific shortcuts (lyrics, chord symbols, figured bass)
//! 2. input-method pass-through while text is being composed
//! 3. the target's own in-place edit (caret movement, typing)
//! 4. arrow-key nudge of the element
//!
//! Releases only matter to text, which leaves hex entry mode.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::host::{EditHost, EditTarget, Transaction};
use super::lyrics::edit_key_lyrics;
use super::nudge::{nudge_delta, step_size};
use super::session::EditSession;
use crate::config::RouterConfig;
use crate::error::InputError;
use crate::models::{Key, KeyEvent, Modifiers, Point, TargetKind};

/// What became of a key event
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum RouteOutcome {
    /// Consumed by a command or an in-place edit
    Handled,
    /// The element was moved by `delta`
    Nudged { delta: Point },
    /// Not consumed; the canvas should let default handling run
    Ignored,
}

impl RouteOutcome {
    /// True if the event should stop propagating
    pub fn is_accepted(&self) -> bool {
        !matches!(self, RouteOutcome::Ignored)
    }
}

/// Named commands the editor forwards while an element is in edit mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditCommand {
    NextLyric,
    PrevLyric,
}

impl FromStr for EditCommand {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next-lyric" => Ok(EditCommand::NextLyric),
            "prev-lyric" => Ok(EditCommand::PrevLyric),
            other => Err(InputError::UnknownCommand(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct KeyRouter {
    config: RouterConfig,
}

impl KeyRouter {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Route one key event to the element in edit mode.
    pub fn route(
        &self,
        event: &KeyEvent,
        target: Option<&mut dyn EditTarget>,
        host: &mut dyn EditHost,
    ) -> RouteOutcome {
        let Some(target) = target else {
            return RouteOutcome::Ignored;
        };

        if event.is_release() {
            return self.key_release(event, target, host);
        }

        if self.config.debug_keys {
            log::debug!(
                "keyPress {:?} mod {:?} <{}> on {}",
                event.key,
                event.modifiers,
                event.text,
                target.kind().as_str()
            );
        }

        let mut session = EditSession::from_event(event);
        let platform = self.config.platform;
        let accelerator = event.has_accelerator(platform);
        let kind = target.kind();

        match kind {
            TargetKind::Lyrics => {
                if edit_key_lyrics(&mut session, target, host, platform) {
                    return RouteOutcome::Handled;
                }
            }
            TargetKind::Harmony => {
                if event.key == Key::Space && !accelerator {
                    host.harmony_beats_tab(true, event.shift());
                    return RouteOutcome::Handled;
                }
            }
            TargetKind::FiguredBass => {
                if event.key == Key::Space && !accelerator {
                    host.figured_bass_tab(false, event.shift());
                    return RouteOutcome::Handled;
                }
            }
            TargetKind::Text | TargetKind::Beam | TargetKind::Element => {}
        }

        if kind.is_text() && target.in_preedit() && host.ime_needs_modifiers() && exposes_modifier(event) {
            // Left for the input method
            return RouteOutcome::Ignored;
        }

        if !(event.shift() && event.key == Key::Backtab) {
            let mut tx = Transaction::begin(&mut *host);
            if target.edit(&mut session) {
                if kind.is_text() {
                    tx.update_text_tools(&session);
                }
                tx.update_grips();
                drop(tx);
                host.finish_command();
                return RouteOutcome::Handled;
            }
            drop(tx);
            host.finish_command();
            // Unconsumed Left/Right on text is accepted by the nudge below
        }

        self.nudge(event, target, host)
    }

    /// Forward a named edit command. Returns true if it applied.
    pub fn edit_command(
        &self,
        command: EditCommand,
        target: Option<&dyn EditTarget>,
        host: &mut dyn EditHost,
    ) -> bool {
        match target {
            Some(t) if t.kind() == TargetKind::Lyrics => {
                match command {
                    EditCommand::NextLyric => host.lyrics_tab(false, true, false),
                    EditCommand::PrevLyric => host.lyrics_tab(true, true, false),
                }
                true
            }
            _ => false,
        }
    }

    fn key_release(&self, event: &KeyEvent, target: &mut dyn EditTarget, host: &mut dyn EditHost) -> RouteOutcome {
        let held = event.modifiers.intersects(Modifiers::CONTROL | Modifiers::SHIFT);
        if target.kind().is_text() && !held {
            target.end_hex_state();
            host.update();
            RouteOutcome::Handled
        } else {
            RouteOutcome::Ignored
        }
    }

    fn nudge(&self, event: &KeyEvent, target: &mut dyn EditTarget, host: &mut dyn EditHost) -> RouteOutcome {
        let raster = self.config.raster;
        let steps = step_size(target.kind(), event.modifiers, target.spatium(), &self.config.nudge, &raster);
        let Some(delta) = nudge_delta(event.key, steps) else {
            return RouteOutcome::Ignored;
        };

        let mut session = EditSession::from_event(event);
        session.init();
        session.delta = delta;
        session.h_raster = raster.horizontal_enabled();
        session.v_raster = raster.vertical_enabled();
        session.grips = target.grips();
        session.cur_grip = target.current_grip();
        session.pos = session.current_grip_center().map(|center| center + delta);

        {
            let _tx = Transaction::begin(&mut *host);
            target.start_edit_drag(&mut session);
            target.edit_drag(&mut session);
            target.end_edit_drag(&mut session);
        }
        host.update_grips();
        host.finish_command();

        RouteOutcome::Nudged { delta }
    }
}

/// Key presses a composing input method has to observe
fn exposes_modifier(event: &KeyEvent) -> bool {
    event.key.is_modifier_key()
        || event
            .modifiers
            .intersects(Modifiers::CONTROL | Modifiers::ALT | Modifiers::SHIFT)
}
