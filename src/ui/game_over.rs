//! End-of-run overlay.

use crate::session::GameOutcome;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the full-screen end-of-run box.
pub fn render_game_over(frame: &mut Frame, area: Rect, outcome: &GameOutcome) {
    let (title, color, detail) = match outcome {
        GameOutcome::Victory { cycle, lux_left } => (
            ":: HABITAT SECURED ::",
            Color::LightGreen,
            format!(
                "You bought your way off the exchange floor on cycle {} with Ⱡ{:.2} to spare.",
                cycle, lux_left
            ),
        ),
        GameOutcome::Starved { cycle } => (
            "LIFE SUPPORT DEPLETED",
            Color::LightRed,
            format!("The supplies ran out on cycle {}. The market outlived you.", cycle),
        ),
        GameOutcome::Collapsed { net_worth } => (
            "MARKET COLLAPSE",
            Color::LightRed,
            format!(
                "The last beacon went dark. Final net worth: Ⱡ{:.2} — not enough for a habitat.",
                net_worth
            ),
        ),
    };

    if area.width < 30 || area.height < 9 {
        return;
    }

    let width = area.width.min(70);
    let height = 9;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let rect = Rect::new(x, y, width, height.min(area.height));

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(detail, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to exit.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );
}
