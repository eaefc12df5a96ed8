//! Exchange board: one row per asset with delta, price, and sparkline.

use super::sparkline::{sparkline, SparkTrend};
use crate::constants::SPARKLINE_WINDOW;
use crate::market::AssetSnapshot;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest name column; longer names are cut with an ellipsis.
const NAME_WIDTH: usize = 31;

fn trend_color(trend: SparkTrend) -> Color {
    match trend {
        SparkTrend::Rising => Color::LightGreen,
        SparkTrend::Falling => Color::LightRed,
        SparkTrend::Flat => Color::Yellow,
    }
}

/// Direction symbol and row color for one asset.
fn delta_style(snap: &AssetSnapshot) -> (char, Color) {
    if snap.delisted {
        ('╳', Color::Red)
    } else if snap.last_change > 0.0 {
        ('⌃', Color::LightGreen)
    } else if snap.last_change < 0.0 {
        ('⌄', Color::LightRed)
    } else {
        ('~', Color::Yellow)
    }
}

fn truncated_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        format!("{:<width$}", name, width = NAME_WIDTH)
    } else {
        let cut: String = name.chars().take(NAME_WIDTH - 1).collect();
        format!("{}…", cut)
    }
}

/// Render the exchange board.
pub fn render_market(frame: &mut Frame, area: Rect, snapshots: &[AssetSnapshot]) {
    let block = Block::default()
        .title(" Exchange ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::with_capacity(snapshots.len() + 1);

    lines.push(Line::from(Span::styled(
        format!(
            " {:>2}  {:<width$} {:>12} {:>11}  {:<10}",
            "#",
            "Asset",
            "Change",
            "Price",
            "Trend",
            width = NAME_WIDTH
        ),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )));

    for snap in snapshots {
        let (sym, color) = delta_style(snap);

        let price_text = if snap.delisted {
            format!("{:>11}", "[BKRP]")
        } else {
            format!("Ⱡ{:>10.2}", snap.price)
        };

        let change_text = if snap.delisted {
            format!("{:>10}", "—")
        } else {
            format!("{:>+10.2}", snap.last_change)
        };

        let (glyphs, trend) = sparkline(&snap.history, SPARKLINE_WINDOW);
        let spark_color = if snap.delisted {
            Color::DarkGray
        } else {
            trend_color(trend)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {:>2}  ", snap.id), Style::default().fg(Color::DarkGray)),
            Span::styled(
                truncated_name(snap.name),
                Style::default().fg(if snap.delisted {
                    Color::DarkGray
                } else {
                    Color::White
                }),
            ),
            Span::styled(format!("{} {}", sym, change_text), Style::default().fg(color)),
            Span::styled(format!(" {}", price_text), Style::default().fg(color)),
            Span::raw("  "),
            Span::styled(glyphs, Style::default().fg(spark_color)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
