//! Current conditions panel
//!
//! Conditions text, city, local date and time, temperature with its icon, and
//! the feels-like / humidity / rain / wind indicators underneath.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::view::DashboardView;

/// Renders the current conditions panel
pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .title(" Now ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(build_lines(view)).block(block), area);
}

fn build_lines(view: &DashboardView) -> Vec<Line<'static>> {
    let icon = view.icon.map(|i| i.glyph()).unwrap_or(" ");

    vec![
        Line::from(Span::styled(
            view.conditions.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            view.city.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(view.date_text.clone()),
        Line::from(Span::styled(
            view.time_text.clone(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                view.temperature.clone(),
                Style::default()
                    .fg(temperature_color(view.temp_value))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(icon),
        ]),
        Line::from(""),
        indicator_line("Feels like", &view.feels_like),
        indicator_line("Humidity", &view.humidity),
        indicator_line("Chance of Rain", &view.rain_chance),
        indicator_line("Wind Speed", &view.wind_speed),
    ]
}

fn indicator_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

/// Color for temperature (warmer = more red, cooler = more blue)
pub(crate) fn temperature_color(temp: f64) -> Color {
    if temp >= 30.0 {
        Color::Red
    } else if temp >= 20.0 {
        Color::Yellow
    } else if temp >= 10.0 {
        Color::Green
    } else if temp >= 0.0 {
        Color::Cyan
    } else {
        Color::Blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use chrono::{TimeZone, Utc};

    fn view() -> DashboardView {
        let now = Utc.with_ymd_and_hms(2025, 3, 21, 9, 5, 0).unwrap();
        DashboardView::build(&fixtures::document(3.0, 2), &now).unwrap()
    }

    #[test]
    fn test_lines_carry_view_strings() {
        let text: Vec<String> = build_lines(&view())
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(text[0], "Clear");
        assert_eq!(text[1], "Minsk");
        assert_eq!(text[2], "Friday, 21st Mar '25");
        assert_eq!(text[3], "12:05 pm");
        assert!(text[5].starts_with("7 °C"));
        assert!(text[7].contains("Feels like"));
        assert!(text[10].ends_with("14.4 km/h"));
    }

    #[test]
    fn test_temperature_color() {
        assert_eq!(temperature_color(31.0), Color::Red);
        assert_eq!(temperature_color(22.0), Color::Yellow);
        assert_eq!(temperature_color(7.4), Color::Cyan);
        assert_eq!(temperature_color(-4.0), Color::Blue);
    }
}
