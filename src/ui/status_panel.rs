//! Colonist panel: funds, life support, positions, habitat progress.

use crate::constants::{HAB_COST, SUPPLY_COST};
use crate::market::AssetSnapshot;
use crate::player::{trade, Player};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Supplies at or below this render in red.
const SUPPLY_WARNING: u32 = 2;

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

/// Render the colonist panel.
pub fn render_status(frame: &mut Frame, area: Rect, player: &Player, snapshot: &[AssetSnapshot]) {
    let block = Block::default()
        .title(" Colonist ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let worth = trade::net_worth(player, snapshot);
    let supply_color = if player.supplies <= SUPPLY_WARNING {
        Color::LightRed
    } else {
        Color::White
    };

    let mut lines = vec![
        Line::from(vec![
            label("Lux:       "),
            Span::styled(
                format!("Ⱡ{:.2}", player.lux),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Supplies:  "),
            Span::styled(format!("{}", player.supplies), Style::default().fg(supply_color)),
            Span::styled(
                format!("  (Ⱡ{:.0} each)", SUPPLY_COST),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            label("Net worth: "),
            Span::styled(format!("Ⱡ{:.2}", worth), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            label("Habitat:   "),
            Span::styled(
                format!("Ⱡ{:.0} ({:.0}%)", HAB_COST, (worth / HAB_COST * 100.0).min(999.0)),
                Style::default().fg(if player.lux >= HAB_COST {
                    Color::LightGreen
                } else {
                    Color::White
                }),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Positions",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if player.holdings.is_empty() {
        lines.push(Line::from(Span::styled(
            "  none",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (id, qty) in &player.holdings {
            let (name, value, dead) = snapshot
                .iter()
                .find(|s| s.id == *id)
                .map(|s| (s.name, s.price * *qty as f64, s.delisted))
                .unwrap_or(("?", 0.0, true));

            let short: String = name.chars().take(18).collect();
            lines.push(Line::from(vec![
                Span::styled(format!("  {:>4} × ", qty), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:<18}", short),
                    Style::default().fg(if dead { Color::DarkGray } else { Color::White }),
                ),
                Span::styled(
                    if dead {
                        " [BKRP]".to_string()
                    } else {
                        format!(" Ⱡ{:.2}", value)
                    },
                    Style::default().fg(if dead { Color::Red } else { Color::Cyan }),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
