// Recording doubles for the edited element and the editor

#![allow(dead_code)]

use score_keys_wasm::edit::{EditHost, EditSession, EditTarget};
use score_keys_wasm::models::{Rect, TargetKind};

/// Every call the router made, in order
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    StartCmd,
    EndCmd,
    FinishCommand,
    Update,
    UpdateGrips,
    UpdateTextTools,
    LyricsTab { back: bool, end: bool, move_only: bool },
    LyricsUpDown { up: bool, end: bool },
    LyricsReturn,
    LyricsMinus,
    LyricsUnderscore,
    HarmonyBeatsTab { no_selection: bool, back: bool },
    FiguredBassTab { measure: bool, back: bool },
}

#[derive(Default)]
pub struct RecordingHost {
    pub calls: Vec<Call>,
    pub ime_needs_modifiers: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open transactions minus closed ones
    pub fn open_transactions(&self) -> i32 {
        self.calls.iter().fold(0, |n, c| match c {
            Call::StartCmd => n + 1,
            Call::EndCmd => n - 1,
            _ => n,
        })
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl EditHost for RecordingHost {
    fn start_cmd(&mut self) {
        self.calls.push(Call::StartCmd);
    }

    fn end_cmd(&mut self) {
        self.calls.push(Call::EndCmd);
    }

    fn finish_command(&mut self) {
        self.calls.push(Call::FinishCommand);
    }

    fn update(&mut self) {
        self.calls.push(Call::Update);
    }

    fn update_grips(&mut self) {
        self.calls.push(Call::UpdateGrips);
    }

    fn update_text_tools(&mut self, _session: &EditSession) {
        self.calls.push(Call::UpdateTextTools);
    }

    fn ime_needs_modifiers(&self) -> bool {
        self.ime_needs_modifiers
    }

    fn lyrics_tab(&mut self, back: bool, end: bool, move_only: bool) {
        self.calls.push(Call::LyricsTab { back, end, move_only });
    }

    fn lyrics_up_down(&mut self, up: bool, end: bool) {
        self.calls.push(Call::LyricsUpDown { up, end });
    }

    fn lyrics_return(&mut self) {
        self.calls.push(Call::LyricsReturn);
    }

    fn lyrics_minus(&mut self) {
        self.calls.push(Call::LyricsMinus);
    }

    fn lyrics_underscore(&mut self) {
        self.calls.push(Call::LyricsUnderscore);
    }

    fn harmony_beats_tab(&mut self, no_selection: bool, back: bool) {
        self.calls.push(Call::HarmonyBeatsTab { no_selection, back });
    }

    fn figured_bass_tab(&mut self, measure: bool, back: bool) {
        self.calls.push(Call::FiguredBassTab { measure, back });
    }
}

/// Element double. `consumes` decides what `edit` answers.
pub struct FakeTarget {
    pub kind: TargetKind,
    pub spatium: f64,
    pub consumes: bool,
    pub preedit: bool,
    pub grips: Vec<Rect>,
    pub current_grip: Option<usize>,
    pub edits: usize,
    pub hex_state_ended: bool,
    /// Sessions seen by start / drag / end, in order
    pub drags: Vec<EditSession>,
}

impl FakeTarget {
    pub fn new(kind: TargetKind) -> Self {
        Self {
            kind,
            spatium: 1.0,
            consumes: false,
            preedit: false,
            grips: Vec::new(),
            current_grip: None,
            edits: 0,
            hex_state_ended: false,
            drags: Vec::new(),
        }
    }

    pub fn consuming(mut self) -> Self {
        self.consumes = true;
        self
    }

    pub fn with_spatium(mut self, spatium: f64) -> Self {
        self.spatium = spatium;
        self
    }
}

impl EditTarget for FakeTarget {
    fn kind(&self) -> TargetKind {
        self.kind
    }

    fn spatium(&self) -> f64 {
        self.spatium
    }

    fn edit(&mut self, _session: &mut EditSession) -> bool {
        self.edits += 1;
        self.consumes
    }

    fn start_edit_drag(&mut self, session: &mut EditSession) {
        self.drags.push(session.clone());
    }

    fn edit_drag(&mut self, session: &mut EditSession) {
        self.drags.push(session.clone());
    }

    fn end_edit_drag(&mut self, session: &mut EditSession) {
        self.drags.push(session.clone());
    }

    fn grips(&self) -> Vec<Rect> {
        self.grips.clone()
    }

    fn current_grip(&self) -> Option<usize> {
        self.current_grip
    }

    fn end_hex_state(&mut self) {
        self.hex_state_ended = true;
    }

    fn in_preedit(&self) -> bool {
        self.preedit
    }
}
