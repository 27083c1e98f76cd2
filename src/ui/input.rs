use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::reveal_state::RevealPhase;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // A notice blocks everything else until acknowledged.
    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_notice();
        }
        return;
    }

    match app.phase() {
        RevealPhase::Idle => match key.code {
            KeyCode::Enter => app.submit(),
            KeyCode::Char(ch) => app.push_char(ch),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Esc => app.request_quit(),
            _ => {}
        },
        // Locked for the duration of the attempt.
        RevealPhase::Shaking | RevealPhase::Revealing => {}
        RevealPhase::ResultShown => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.reset();
            }
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
