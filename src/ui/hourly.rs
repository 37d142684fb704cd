//! Hourly breakdown of the rolling 24-hour window

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::widgets::TempSparkline;
use crate::view::HourlyCard;

/// Renders the sparkline over the window, then one line per hour
pub fn render(frame: &mut Frame, area: Rect, cards: &[HourlyCard]) {
    let block = Block::default()
        .title(" Next 24 hours ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new("No hourly forecast available")
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let temps: Vec<f64> = cards.iter().map(|c| c.temp_value).collect();
    let mut sparkline = TempSparkline::new(&temps);
    if let Some(start) = cards.iter().position(|c| c.is_tomorrow) {
        sparkline = sparkline.day_break(start);
    }
    frame.render_widget(sparkline, chunks[0]);

    let lines: Vec<Line> = cards.iter().map(build_hourly_line).collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

/// Builds a single line for an hourly card
fn build_hourly_line(card: &HourlyCard) -> Line<'static> {
    let label_style = if card.is_tomorrow {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(format!("{:>6}", card.label), label_style),
        Span::raw("  "),
        Span::raw(format!("{:<3}", card.icon.map(|i| i.glyph()).unwrap_or(""))),
        Span::styled(
            format!("{:>5}", card.temperature),
            Style::default().fg(super::current::temperature_color(card.temp_value)),
        ),
    ])
}
