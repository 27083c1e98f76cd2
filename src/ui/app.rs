use crate::reveal::Sequencer;
use crate::ui::events::AppEvent;
use crate::ui::reveal_state::{reduce, RevealIntent, RevealPhase, RevealState};

pub const EMPTY_CODE_NOTICE: &str = "シリアルコードを入力してください";

/// The widget itself: owns the code input field, the reveal state machine,
/// and the attempt generation that invalidates in-flight timers on reset.
///
/// The input gate lives here: `submit` refuses to start a second attempt
/// while one is running, and `reset` always restores full interactivity.
pub struct App {
    should_quit: bool,
    code_input: String,
    reveal: RevealState,
    /// Generation counter. Bumped on every submit and reset; service events
    /// carrying any other value are stale and dropped.
    attempt: u64,
    sequencer: Option<Sequencer>,
    /// Tick counter driving the shake animation frame.
    shake_frame: u8,
    /// Whether the fixture provider is active; shown in the header.
    demo: bool,
}

impl App {
    pub fn new(sequencer: Sequencer, demo: bool) -> Self {
        Self {
            should_quit: false,
            code_input: String::new(),
            reveal: RevealState::default(),
            attempt: 0,
            sequencer: Some(sequencer),
            shake_frame: 0,
            demo,
        }
    }

    /// App with no sequencer attached; submits lock the UI but never issue
    /// a request. Used by the state-machine tests.
    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self {
            should_quit: false,
            code_input: String::new(),
            reveal: RevealState::default(),
            attempt: 0,
            sequencer: None,
            shake_frame: 0,
            demo: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn phase(&self) -> RevealPhase {
        self.reveal.phase
    }

    pub fn notice(&self) -> Option<&str> {
        self.reveal.notice.as_deref()
    }

    pub fn code_input(&self) -> &str {
        &self.code_input
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn shake_frame(&self) -> u8 {
        self.shake_frame
    }

    pub fn demo(&self) -> bool {
        self.demo
    }

    pub fn on_tick(&mut self) {
        if self.reveal.phase == RevealPhase::Shaking {
            self.shake_frame = self.shake_frame.wrapping_add(1);
        }
    }

    pub fn push_char(&mut self, ch: char) {
        if self.reveal.controls_enabled() && !ch.is_control() {
            self.code_input.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.reveal.controls_enabled() {
            self.code_input.pop();
        }
    }

    /// One redemption attempt. Ignored while controls are locked; an
    /// empty/whitespace code raises a validation notice without locking
    /// anything or issuing a request.
    pub fn submit(&mut self) {
        if !self.reveal.controls_enabled() {
            return;
        }

        let code = self.code_input.trim();
        if code.is_empty() {
            self.dispatch(RevealIntent::Notify {
                message: EMPTY_CODE_NOTICE.to_string(),
            });
            return;
        }

        let code = code.to_string();
        self.attempt += 1;
        self.dispatch(RevealIntent::Lock);
        if let Some(sequencer) = &self.sequencer {
            sequencer.begin(code, self.attempt);
        }
    }

    /// Full return to idle: code field cleared, modal hidden, controls
    /// re-enabled, outstanding timers invalidated. Safe from any state and
    /// idempotent.
    pub fn reset(&mut self) {
        self.code_input.clear();
        self.attempt += 1;
        self.dispatch(RevealIntent::Reset);
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(RevealIntent::DismissNotice);
    }

    /// Events produced by the sequencer. Anything from a superseded attempt
    /// is dropped here, which is what makes reset safe against dangling
    /// timers.
    pub fn on_service_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Resolved { attempt, outcome } => {
                if attempt == self.attempt {
                    self.dispatch(RevealIntent::Resolved { outcome });
                }
            }
            AppEvent::Effect { attempt, effect } => {
                if attempt == self.attempt {
                    self.dispatch(RevealIntent::Apply(effect));
                }
            }
            AppEvent::ClassifyFailed { attempt, message } => {
                if attempt == self.attempt {
                    self.code_input.clear();
                    self.attempt += 1;
                    self.dispatch(RevealIntent::Fail {
                        message: format!("エラーが発生しました: {message}"),
                    });
                }
            }
            AppEvent::Key(_) | AppEvent::Tick | AppEvent::Resize => {}
        }
    }

    fn dispatch(&mut self, intent: RevealIntent) {
        self.reveal = reduce(std::mem::take(&mut self.reveal), intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::Effect;
    use crate::service::Outcome;

    fn submitted(code: &str) -> App {
        let mut app = App::detached();
        for ch in code.chars() {
            app.push_char(ch);
        }
        app.submit();
        app
    }

    fn win(prize: &str) -> Outcome {
        Outcome::Win {
            prize_name: prize.to_string(),
        }
    }

    // -- input gate --------------------------------------------------------

    #[test]
    fn empty_code_raises_notice_without_locking() {
        let app = submitted("");
        assert_eq!(app.phase(), RevealPhase::Idle);
        assert_eq!(app.notice(), Some(EMPTY_CODE_NOTICE));
        assert_eq!(app.attempt(), 0, "no request may be issued");
    }

    #[test]
    fn whitespace_code_raises_notice_without_locking() {
        let app = submitted("   ");
        assert_eq!(app.phase(), RevealPhase::Idle);
        assert_eq!(app.notice(), Some(EMPTY_CODE_NOTICE));
        assert_eq!(app.attempt(), 0);
    }

    #[test]
    fn valid_code_locks_and_starts_an_attempt() {
        let app = submitted("ABC");
        assert_eq!(app.phase(), RevealPhase::Shaking);
        assert_eq!(app.attempt(), 1);
    }

    #[test]
    fn submit_while_locked_is_a_noop() {
        let mut app = submitted("ABC");
        app.submit();
        app.submit();
        assert_eq!(app.attempt(), 1, "no duplicate request");
    }

    #[test]
    fn typing_is_ignored_while_locked() {
        let mut app = submitted("ABC");
        app.push_char('X');
        app.backspace();
        assert_eq!(app.code_input(), "ABC");
    }

    #[test]
    fn submit_blocked_while_notice_is_up() {
        let mut app = submitted("");
        app.push_char('A');
        app.submit();
        assert_eq!(app.attempt(), 0);

        app.dismiss_notice();
        app.push_char('A');
        app.submit();
        assert_eq!(app.attempt(), 1);
    }

    // -- reveal lifecycle --------------------------------------------------

    fn drive_to_result(app: &mut App, outcome: Outcome) {
        let attempt = app.attempt();
        app.on_service_event(AppEvent::Resolved { attempt, outcome });
        for effect in [
            Effect::ShakeStop,
            Effect::FlashStart,
            Effect::BoxOpen,
            Effect::RevealResult,
            Effect::FlashStop,
            Effect::GaugeFill,
        ] {
            app.on_service_event(AppEvent::Effect { attempt, effect });
        }
    }

    #[test]
    fn full_reveal_shows_the_won_prize() {
        let mut app = submitted("SSR");
        drive_to_result(&mut app, win("アルマンド・ゴールド"));
        assert_eq!(app.phase(), RevealPhase::ResultShown);
        assert_eq!(
            app.reveal().outcome,
            Some(win("アルマンド・ゴールド")),
        );
    }

    #[test]
    fn close_after_result_returns_to_idle() {
        let mut app = submitted("SSR");
        drive_to_result(&mut app, win("prize"));
        app.reset();
        assert_eq!(app.phase(), RevealPhase::Idle);
        assert_eq!(app.code_input(), "");
        assert_eq!(*app.reveal(), RevealState::default());
    }

    #[test]
    fn reset_twice_matches_reset_once() {
        let mut app = submitted("SSR");
        drive_to_result(&mut app, win("prize"));
        app.reset();
        let once = (app.reveal().clone(), app.code_input().to_string());
        app.reset();
        assert_eq!((app.reveal().clone(), app.code_input().to_string()), once);
    }

    // -- failure path ------------------------------------------------------

    #[test]
    fn classification_failure_resets_with_notice() {
        let mut app = submitted("ERROR");
        let attempt = app.attempt();
        app.on_service_event(AppEvent::ClassifyFailed {
            attempt,
            message: "無効なコードです".to_string(),
        });
        assert_eq!(app.phase(), RevealPhase::Idle);
        assert_eq!(app.code_input(), "");
        assert_eq!(
            app.notice(),
            Some("エラーが発生しました: 無効なコードです")
        );

        app.dismiss_notice();
        assert!(app.reveal().controls_enabled());
    }

    // -- stale-event cancellation ------------------------------------------

    #[test]
    fn events_from_a_reset_attempt_are_dropped() {
        let mut app = submitted("ABC");
        let stale = app.attempt();
        app.reset();

        app.on_service_event(AppEvent::Resolved {
            attempt: stale,
            outcome: win("prize"),
        });
        app.on_service_event(AppEvent::Effect {
            attempt: stale,
            effect: Effect::RevealResult,
        });
        assert_eq!(app.phase(), RevealPhase::Idle);
        assert!(app.reveal().outcome.is_none());
    }

    #[test]
    fn failure_from_a_reset_attempt_is_dropped() {
        let mut app = submitted("ABC");
        let stale = app.attempt();
        app.reset();

        app.on_service_event(AppEvent::ClassifyFailed {
            attempt: stale,
            message: "late".to_string(),
        });
        assert_eq!(app.notice(), None);
    }

    // -- shake animation ---------------------------------------------------

    #[test]
    fn shake_frame_advances_only_while_shaking() {
        let mut app = App::detached();
        app.on_tick();
        assert_eq!(app.shake_frame(), 0);

        app.push_char('A');
        app.submit();
        app.on_tick();
        app.on_tick();
        assert_eq!(app.shake_frame(), 2);
    }
}
