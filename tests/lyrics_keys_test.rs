// Key handling while a lyric syllable is in edit mode

mod support;

use score_keys_wasm::config::RouterConfig;
use score_keys_wasm::edit::{EditTarget, KeyRouter, RouteOutcome};
use score_keys_wasm::models::{Key, KeyEvent, Modifiers, Platform, TargetKind};
use support::{Call, FakeTarget, RecordingHost};

fn lyrics_key(router: &KeyRouter, event: KeyEvent, target: &mut FakeTarget) -> (RouteOutcome, RecordingHost) {
    let mut host = RecordingHost::new();
    let outcome = router.route(&event, Some(target as &mut dyn EditTarget), &mut host);
    (outcome, host)
}

#[test]
fn test_space_advances_to_next_syllable() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics);

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Space, Modifiers::empty(), " "), &mut target);

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(host.calls, vec![Call::LyricsTab { back: false, end: true, move_only: false }]);
}

#[test]
fn test_shift_space_goes_back_a_syllable() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics);

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Space, Modifiers::SHIFT, " "), &mut target);

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(host.calls, vec![Call::LyricsTab { back: true, end: true, move_only: false }]);
    assert_eq!(host.open_transactions(), 0);
}

#[test]
fn test_underscore_extends_melisma_from_either_branch() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics);

    // Some layouts report "_" on the space key
    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Space, Modifiers::SHIFT, "_"), &mut target);
    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(host.calls, vec![Call::LyricsUnderscore]);

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Other('_' as u32), Modifiers::SHIFT, "_"), &mut target);
    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(host.calls, vec![Call::LyricsUnderscore]);
}

#[test]
fn test_minus_hyphenates() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics);

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Other('-' as u32), Modifiers::empty(), "-"), &mut target);

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(host.calls, vec![Call::LyricsMinus]);
    assert_eq!(target.edits, 0);
}

#[test]
fn test_dom_minus_hyphenates() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics);

    let (outcome, host) = lyrics_key(&router, KeyEvent::from_dom("keydown", "-", Modifiers::empty()), &mut target);

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(host.calls, vec![Call::LyricsMinus]);
}

#[test]
fn test_accelerator_minus_is_typed_as_text() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics).consuming();

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Other('-' as u32), Modifiers::CONTROL, "-"), &mut target);

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(host.count(&Call::LyricsMinus), 0);
    assert_eq!(target.edits, 1);
}

#[test]
fn test_accelerator_space_is_not_a_lyrics_command() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics);

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Space, Modifiers::CONTROL, " "), &mut target);

    // Falls through to text editing, then nudge, which has no use for Space
    assert_eq!(outcome, RouteOutcome::Ignored);
    assert_eq!(target.edits, 1);
    assert!(host.calls.iter().all(|c| !matches!(c, Call::LyricsTab { .. })));
}

#[test]
fn test_mac_uses_alt_as_accelerator() {
    let router = KeyRouter::new(RouterConfig {
        platform: Platform::Mac,
        ..Default::default()
    });
    let mut target = FakeTarget::new(TargetKind::Lyrics);

    let (_, host) = lyrics_key(&router, KeyEvent::press(Key::Space, Modifiers::CONTROL, " "), &mut target);
    assert_eq!(host.calls, vec![Call::LyricsTab { back: false, end: true, move_only: false }]);

    let (_, host) = lyrics_key(&router, KeyEvent::press(Key::Space, Modifiers::ALT, " "), &mut target);
    assert_eq!(host.count(&Call::LyricsTab { back: false, end: true, move_only: false }), 0);
}

#[test]
fn test_arrow_moves_caret_inside_syllable() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics).consuming();

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Left, Modifiers::empty(), ""), &mut target);

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(target.edits, 1);
    assert_eq!(host.calls, vec![Call::UpdateTextTools, Call::Update, Call::FinishCommand]);
}

#[test]
fn test_arrow_at_syllable_end_crosses_to_neighbour() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics);

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Left, Modifiers::empty(), ""), &mut target);
    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(host.calls, vec![Call::LyricsTab { back: true, end: true, move_only: true }]);

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Right, Modifiers::empty(), ""), &mut target);
    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(host.calls, vec![Call::LyricsTab { back: false, end: false, move_only: true }]);
}

#[test]
fn test_control_arrow_jumps_syllable_without_editing() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics).consuming();

    let (_, host) = lyrics_key(&router, KeyEvent::press(Key::Right, Modifiers::CONTROL, ""), &mut target);

    assert_eq!(target.edits, 0);
    assert_eq!(host.calls, vec![Call::LyricsTab { back: false, end: false, move_only: true }]);
}

#[test]
fn test_control_shift_arrow_still_offers_edit() {
    // Only a bare Control skips the in-place edit (word selection needs Control+Shift)
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics).consuming();

    let (_, host) = lyrics_key(&router, KeyEvent::press(Key::Left, Modifiers::CONTROL | Modifiers::SHIFT, ""), &mut target);

    assert_eq!(target.edits, 1);
    assert_eq!(host.count(&Call::UpdateTextTools), 1);
}

#[test]
fn test_vertical_arrows_change_verse() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics);

    let (_, host) = lyrics_key(&router, KeyEvent::press(Key::Up, Modifiers::empty(), ""), &mut target);
    assert_eq!(host.calls, vec![Call::LyricsUpDown { up: true, end: true }]);

    let (_, host) = lyrics_key(&router, KeyEvent::press(Key::Down, Modifiers::empty(), ""), &mut target);
    assert_eq!(host.calls, vec![Call::LyricsUpDown { up: false, end: true }]);
}

#[test]
fn test_return_commits_syllable() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics);

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Return, Modifiers::empty(), "\r"), &mut target);

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(host.calls, vec![Call::LyricsReturn]);
}

#[test]
fn test_letters_are_typed_into_syllable() {
    let router = KeyRouter::default();
    let mut target = FakeTarget::new(TargetKind::Lyrics).consuming();

    let (outcome, host) = lyrics_key(&router, KeyEvent::press(Key::Other('l' as u32), Modifiers::empty(), "l"), &mut target);

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(target.edits, 1);
    assert_eq!(
        host.calls,
        vec![
            Call::StartCmd,
            Call::UpdateTextTools,
            Call::UpdateGrips,
            Call::EndCmd,
            Call::FinishCommand,
        ]
    );
}
