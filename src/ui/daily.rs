//! Daily outlook list

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::view::DailyCard;

/// Renders up to ten daily cards as table rows
pub fn render(frame: &mut Frame, area: Rect, cards: &[DailyCard]) {
    let header = Row::new(vec!["Day", "", "High", "Low"]).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = cards.iter().map(build_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" 10-day outlook ")
            .borders(Borders::ALL),
    );

    frame.render_widget(table, area);
}

fn build_row(card: &DailyCard) -> Row<'static> {
    Row::new(vec![
        Cell::from(card.label.clone()),
        Cell::from(card.icon.map(|i| i.glyph()).unwrap_or("")),
        Cell::from(card.max.clone()).style(Style::default().fg(Color::LightRed)),
        Cell::from(card.min.clone()).style(Style::default().fg(Color::LightBlue)),
    ])
}
