//! Reveal state machine.
//!
//! One explicit finite-state object owns everything the widget shows,
//! replacing the scattered enabled/hidden flags a DOM version would smear
//! across its nodes. All transitions go through [`reduce`], a pure
//! function; side effects (starting the sequencer, clearing the input
//! field) are handled by the caller around the dispatch.

use crate::reveal::Effect;
use crate::service::{gauge_percent, Outcome};

/// Control phase of the widget. Controls are locked in every phase except
/// `Idle`; the close control is only live in `ResultShown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Idle,
    /// Request in flight or suspense hold running; the box shakes.
    Shaking,
    /// Flash transition between suspense and disclosure.
    Revealing,
    /// Result modal is up, waiting for the close control.
    ResultShown,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealState {
    pub phase: RevealPhase,
    /// Flash overlay currently covering the stage.
    pub flash: bool,
    /// Box art frame: closed until the timeline opens it.
    pub box_open: bool,
    /// Resolved classification, held from resolution until reset.
    pub outcome: Option<Outcome>,
    /// Gauge fill actually drawn, in percent. Written as zero on reveal and
    /// bumped to the real value one scheduling turn later.
    pub gauge_fill: f64,
    /// Blocking notification; all other interaction waits for dismissal.
    pub notice: Option<String>,
}

impl RevealState {
    /// Whether the input field and submit control accept interaction.
    pub fn controls_enabled(&self) -> bool {
        self.phase == RevealPhase::Idle && self.notice.is_none()
    }
}

#[derive(Debug, Clone)]
pub enum RevealIntent {
    /// Valid code accepted; lock the controls and start shaking.
    Lock,
    /// Classification resolved. Purely stores the outcome — nothing is
    /// shown until the timeline effects fire.
    Resolved { outcome: Outcome },
    /// A scheduled timeline effect reached its deadline.
    Apply(Effect),
    /// Classification failed; converge to `Idle` behind a blocking notice.
    Fail { message: String },
    /// Validation message; no phase transition.
    Notify { message: String },
    DismissNotice,
    /// Full return to `Idle`. Safe from any state.
    Reset,
}

pub fn reduce(state: RevealState, intent: RevealIntent) -> RevealState {
    match intent {
        RevealIntent::Lock => match state.phase {
            RevealPhase::Idle if state.notice.is_none() => RevealState {
                phase: RevealPhase::Shaking,
                ..RevealState::default()
            },
            _ => state,
        },

        RevealIntent::Resolved { outcome } => match state.phase {
            RevealPhase::Shaking => RevealState {
                outcome: Some(outcome),
                ..state
            },
            _ => state,
        },

        RevealIntent::Apply(effect) => apply_effect(state, effect),

        RevealIntent::Fail { message } => RevealState {
            notice: Some(message),
            ..RevealState::default()
        },

        RevealIntent::Notify { message } => RevealState {
            notice: Some(message),
            ..state
        },

        RevealIntent::DismissNotice => RevealState {
            notice: None,
            ..state
        },

        RevealIntent::Reset => RevealState::default(),
    }
}

fn apply_effect(state: RevealState, effect: Effect) -> RevealState {
    match effect {
        Effect::ShakeStop => match state.phase {
            RevealPhase::Shaking => RevealState {
                phase: RevealPhase::Revealing,
                ..state
            },
            _ => state,
        },

        Effect::FlashStart => match state.phase {
            RevealPhase::Revealing => RevealState {
                flash: true,
                ..state
            },
            _ => state,
        },

        Effect::BoxOpen => match state.phase {
            RevealPhase::Revealing => RevealState {
                box_open: true,
                ..state
            },
            _ => state,
        },

        Effect::RevealResult => match state.phase {
            // Without a stored outcome there is nothing to disclose.
            RevealPhase::Revealing if state.outcome.is_some() => RevealState {
                phase: RevealPhase::ResultShown,
                gauge_fill: 0.0,
                ..state
            },
            _ => state,
        },

        Effect::FlashStop => RevealState {
            flash: false,
            ..state
        },

        Effect::GaugeFill => match (&state.phase, &state.outcome) {
            (
                RevealPhase::ResultShown,
                Some(Outcome::Lose {
                    current_points,
                    target_points,
                    ..
                }),
            ) => {
                let fill = gauge_percent(*current_points, *target_points);
                RevealState {
                    gauge_fill: fill,
                    ..state
                }
            }
            _ => state,
        },
    }
}
