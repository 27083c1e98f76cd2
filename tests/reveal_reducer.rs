//! Drives the reveal state machine through the actual effect schedule, the
//! same order the sequencer delivers it.

use kaibako::reveal::timeline;
use kaibako::service::Outcome;
use kaibako::ui::reveal_state::{reduce, RevealIntent, RevealPhase, RevealState};

fn after_schedule(outcome: Outcome) -> RevealState {
    let mut state = reduce(RevealState::default(), RevealIntent::Lock);
    state = reduce(state, RevealIntent::Resolved { outcome });
    for (_, effect) in timeline::schedule() {
        state = reduce(state, RevealIntent::Apply(effect));
    }
    state
}

#[test]
fn win_schedule_ends_with_the_modal_open() {
    let state = after_schedule(Outcome::Win {
        prize_name: "アルマンド・ゴールド".to_string(),
    });
    assert_eq!(state.phase, RevealPhase::ResultShown);
    assert!(state.box_open);
    assert!(!state.flash, "flash must be stopped with the reveal");
    assert!(!state.controls_enabled());
}

#[test]
fn lose_schedule_fills_the_gauge() {
    let state = after_schedule(Outcome::Lose {
        points_added: 1,
        current_points: 23,
        target_points: 50,
    });
    assert_eq!(state.phase, RevealPhase::ResultShown);
    assert_eq!(state.gauge_fill, 46.0);
}

#[test]
fn gauge_fill_is_clamped_for_stale_totals() {
    let state = after_schedule(Outcome::Lose {
        points_added: 1,
        current_points: 60,
        target_points: 50,
    });
    assert_eq!(state.gauge_fill, 100.0);
}

#[test]
fn lock_is_rejected_while_an_attempt_runs() {
    let locked = reduce(RevealState::default(), RevealIntent::Lock);
    let again = reduce(locked.clone(), RevealIntent::Lock);
    assert_eq!(again, locked);
}

#[test]
fn failure_mid_shake_converges_to_idle() {
    let mut state = reduce(RevealState::default(), RevealIntent::Lock);
    state = reduce(
        state,
        RevealIntent::Fail {
            message: "エラーが発生しました: 無効なコードです".to_string(),
        },
    );
    assert_eq!(state.phase, RevealPhase::Idle);
    assert!(state.notice.is_some());
    assert!(!state.controls_enabled());

    state = reduce(state, RevealIntent::DismissNotice);
    assert!(state.controls_enabled());
}

#[test]
fn reset_from_any_point_is_idempotent() {
    let shown = after_schedule(Outcome::Win {
        prize_name: "prize".to_string(),
    });
    let once = reduce(shown, RevealIntent::Reset);
    let twice = reduce(once.clone(), RevealIntent::Reset);
    assert_eq!(once, RevealState::default());
    assert_eq!(once, twice);
}
