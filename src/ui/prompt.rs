//! Command prompt line and notice rendering.

use crate::session::{Notice, NoticeTone};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the bordered input line and place the cursor after the typed text.
pub fn render_prompt(frame: &mut Frame, area: Rect, input: &str) {
    let block = Block::default()
        .title(" Command ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(input, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    let cursor_x = inner.x + 2 + input.chars().count() as u16;
    if cursor_x < inner.x + inner.width {
        frame.set_cursor(cursor_x, inner.y);
    }
}

/// Render the last command's notice, colored by tone.
pub fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };
    let color = match notice.tone {
        NoticeTone::Info => Color::Cyan,
        NoticeTone::Success => Color::LightGreen,
        NoticeTone::Error => Color::LightRed,
    };
    let line = Line::from(Span::styled(
        format!(" {}", notice.text),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the one-line key/command reference footer.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let pairs: [(&str, &str); 6] = [
        ("buy/sell <#> <qty>", "trade"),
        ("stock <qty>", "supplies"),
        ("wait", "pass"),
        ("hab", "win"),
        ("help", "more"),
        ("quit", "leave"),
    ];

    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, what) in pairs {
        spans.push(Span::styled(
            format!(" [{}]", key),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}", what),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
