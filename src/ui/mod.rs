//! Terminal scenes. The UI reads engine snapshots and session state; it never
//! produces engine state.

pub mod game_over;
pub mod market_scene;
pub mod prompt;
pub mod sparkline;
pub mod status_panel;

use crate::babble;
use crate::session::{GameSession, Notice};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

/// Draw the main game screen.
pub fn draw_ui(
    frame: &mut Frame,
    session: &GameSession,
    notice: Option<&Notice>,
    input: &str,
    help_open: bool,
) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stability gauge
            Constraint::Min(14),   // Exchange + colonist panel
            Constraint::Length(1), // Floor babble
            Constraint::Length(3), // Command prompt
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_stability_header(frame, v_chunks[0], session);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(60), Constraint::Length(36)])
        .split(v_chunks[1]);

    let snapshot = session.market.snapshot();
    market_scene::render_market(frame, h_chunks[0], &snapshot);
    status_panel::render_status(frame, h_chunks[1], &session.player, &snapshot);

    draw_babble_line(frame, v_chunks[2], session);
    prompt::render_prompt(frame, v_chunks[3], input);
    prompt::render_notice(frame, v_chunks[4], notice);
    prompt::render_footer(frame, v_chunks[5]);

    if help_open {
        render_help_overlay(frame, size);
    }
}

/// Stability gauge with the cycle counter in the title.
fn draw_stability_header(frame: &mut Frame, area: Rect, session: &GameSession) {
    let stability = session.market.stability();
    let color = if stability >= 0.66 {
        Color::LightGreen
    } else if stability >= 0.33 {
        Color::Yellow
    } else {
        Color::LightRed
    };

    let block = Block::default()
        .title(format!(
            " FELD — cycle {}/{} ",
            session.market.cycle(),
            session.market.total_cycles()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(stability)
        .label(Span::styled(
            format!("Market Stability {:5.1}%", stability * 100.0),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, area);
}

/// One line of exchange-floor flavor text under the board.
fn draw_babble_line(frame: &mut Frame, area: Rect, session: &GameSession) {
    let text = babble::line(session.market.stability(), session.market.cycle());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" ▒ {}", text),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))),
        area,
    );
}

/// Centered command reference. Any key closes it.
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    if area.width < 30 || area.height < 14 {
        return;
    }

    let width = area.width.min(58);
    let height = 14u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let rect = Rect::new(x, y, width, height.min(area.height));

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(" Commands ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let entries: [(&str, &str, bool); 8] = [
        ("buy <#> <qty>", "buy shares at the current price", true),
        ("sell <#> <qty>", "sell shares at the current price", true),
        ("stock <qty>", "buy supply units", true),
        ("wait", "let one cycle pass", true),
        ("hab", "buy the habitat and win", false),
        ("status", "net worth and supplies report", false),
        ("help", "this overlay", false),
        ("quit", "abandon the run", false),
    ];

    let mut lines = vec![Line::from("")];
    for (cmd, what, costs) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<15}", cmd), Style::default().fg(Color::Yellow)),
            Span::styled(what, Style::default().fg(Color::White)),
            Span::styled(
                if costs { "  ·1 cycle" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Cycle-costing actions burn one supply unit.",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
