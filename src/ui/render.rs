use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};
use ratatui::Frame;

use crate::service::{points_remaining, Outcome};
use crate::ui::app::App;
use crate::ui::boxart;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::reveal_state::{RevealPhase, RevealState};
use crate::ui::theme::{
    FLASH, GAUGE_FILL, GAUGE_TRACK, GLOBAL_BORDER, GOLD, HEADER_TEXT, HINT_TEXT, NOTICE_TEXT,
    POPUP_BORDER,
};

pub const WIN_HEADLINE: &str = "SSR 獲得！";

fn points_headline(points_added: u32) -> String {
    format!("{points_added}pt GET!")
}

fn remaining_line(current_points: u32, target_points: u32) -> String {
    format!(
        "スタバチケットまであと {}pt",
        points_remaining(current_points, target_points)
    )
}

fn gauge_label(current_points: u32, target_points: u32) -> String {
    format!("{current_points} / {target_points}pt")
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.demo()), header);
    draw_stage(frame, body, app);
    frame.render_widget(Footer::new().widget(footer.width), footer);

    // The flash covers the stage between suspense and disclosure.
    if app.reveal().flash {
        frame.render_widget(Clear, body);
        frame.render_widget(Block::default().style(Style::default().bg(FLASH)), body);
    }

    if app.phase() == RevealPhase::ResultShown {
        draw_result_modal(frame, area, app.reveal());
    }

    if let Some(message) = app.notice() {
        draw_notice(frame, area, message);
    }
}

fn draw_stage(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(boxart::BOX_OPEN.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(body);

    draw_box_art(frame, rows[0], app);
    draw_code_field(frame, rows[1], app);

    let hint = if app.reveal().controls_enabled() {
        "シリアルコードを入力して Enter"
    } else {
        "開封中…"
    };
    frame.render_widget(
        Paragraph::new(hint)
            .style(Style::default().fg(HINT_TEXT))
            .alignment(Alignment::Center),
        rows[2],
    );
}

fn draw_box_art(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let shaking = app.phase() == RevealPhase::Shaking;
    let dx = if shaking {
        boxart::shake_offset(app.shake_frame())
    } else {
        0
    };
    // Keep the right edge inside the buffer when nudged right.
    let stage = Rect {
        x: shift(area.x, dx),
        width: if dx > 0 {
            area.width.saturating_sub(dx as u16)
        } else {
            area.width
        },
        ..area
    };

    let lines: Vec<Line> = boxart::frame(app.reveal().box_open)
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(GOLD))))
        .collect();
    let art_height = lines.len() as u16;
    let padded = Rect {
        y: stage.y + stage.height.saturating_sub(art_height) / 2,
        height: art_height.min(stage.height),
        ..stage
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        padded,
    );
}

fn draw_code_field(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let enabled = app.reveal().controls_enabled();
    let field = centered_rect(50, 100, area);

    let mut content = app.code_input().to_string();
    if enabled {
        content.push('▏');
    }

    let style = if enabled {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
    };

    frame.render_widget(
        Paragraph::new(content).style(style).block(
            Block::default()
                .title("シリアルコード")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        field,
    );
}

fn draw_result_modal(frame: &mut Frame<'_>, area: Rect, state: &RevealState) {
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title("結果")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    match &state.outcome {
        Some(Outcome::Win { prize_name }) => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled("✦ ✦ ✦ ✦ ✦", Style::default().fg(GOLD))),
                Line::from(Span::styled(
                    WIN_HEADLINE,
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    prize_name.clone(),
                    Style::default().fg(HEADER_TEXT),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                inner,
            );
        }
        Some(Outcome::Lose {
            points_added,
            current_points,
            target_points,
        }) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Length(1),
                    Constraint::Length(2),
                    Constraint::Min(0),
                ])
                .split(inner);

            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    points_headline(*points_added),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center),
                rows[0],
            );

            frame.render_widget(
                Gauge::default()
                    .gauge_style(Style::default().fg(GAUGE_FILL).bg(GAUGE_TRACK))
                    .ratio(state.gauge_fill / 100.0)
                    .label(gauge_label(*current_points, *target_points)),
                rows[1],
            );

            frame.render_widget(
                Paragraph::new(remaining_line(*current_points, *target_points))
                    .style(Style::default().fg(HEADER_TEXT))
                    .alignment(Alignment::Center),
                rows[2],
            );
        }
        // RevealResult never fires without a stored outcome.
        None => {}
    }

    let hint = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1.min(inner.height),
        ..inner
    };
    frame.render_widget(
        Paragraph::new("Enter で閉じる")
            .style(Style::default().fg(HINT_TEXT))
            .alignment(Alignment::Center),
        hint,
    );
}

fn draw_notice(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let popup = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title("お知らせ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(NOTICE_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter で閉じる",
            Style::default().fg(HINT_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn shift(x: u16, dx: i16) -> u16 {
    if dx >= 0 {
        x.saturating_add(dx as u16)
    } else {
        x.saturating_sub(dx.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::Effect;
    use crate::ui::events::AppEvent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App, width: u16, height: u16) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
    }

    fn app_with_result(code: &str, outcome: Outcome) -> App {
        let mut app = App::detached();
        for ch in code.chars() {
            app.push_char(ch);
        }
        app.submit();
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
        app
    }

    #[test]
    fn result_surface_strings() {
        assert_eq!(WIN_HEADLINE, "SSR 獲得！");
        assert_eq!(points_headline(1), "1pt GET!");
        assert_eq!(remaining_line(23, 50), "スタバチケットまであと 27pt");
        assert_eq!(remaining_line(60, 50), "スタバチケットまであと 0pt");
        assert_eq!(gauge_label(23, 50), "23 / 50pt");
    }

    #[test]
    fn draw_survives_every_phase() {
        let mut app = App::detached();
        render(&app, 80, 24);

        // Empty submit puts the validation notice up.
        app.submit();
        render(&app, 80, 24);

        app.dismiss_notice();
        app.push_char('A');
        app.submit();
        app.on_tick();
        render(&app, 80, 24);

        let win = app_with_result(
            "SSR",
            Outcome::Win {
                prize_name: "アルマンド・ゴールド".to_string(),
            },
        );
        render(&win, 80, 24);

        let lose = app_with_result(
            "ABC",
            Outcome::Lose {
                points_added: 1,
                current_points: 23,
                target_points: 50,
            },
        );
        render(&lose, 80, 24);
    }

    #[test]
    fn draw_survives_a_tiny_terminal() {
        let lose = app_with_result(
            "ABC",
            Outcome::Lose {
                points_added: 1,
                current_points: 60,
                target_points: 50,
            },
        );
        render(&lose, 5, 4);
        render(&lose, 1, 1);
    }

    #[test]
    fn shift_saturates_at_the_left_edge() {
        assert_eq!(shift(0, -1), 0);
        assert_eq!(shift(3, 1), 4);
        assert_eq!(shift(3, -1), 2);
    }
}
