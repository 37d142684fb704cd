//! UI rendering module for wxdash
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod current;
pub mod daily;
pub mod help_overlay;
pub mod hourly;
pub mod widgets;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, InputMode};
use crate::state::{ForecastView, FETCH_FAILED_MESSAGE};
use crate::view::DashboardView;

pub use help_overlay::render as render_help_overlay;

/// Renders the whole dashboard for the current application state
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(frame.area());

    let body = chunks[0];
    let state = &app.dashboard;

    if state.loading {
        render_message(frame, body, "Loading...", Color::Cyan);
    } else if state.error {
        render_message(frame, body, FETCH_FAILED_MESSAGE, Color::Red);
    } else if let Some(view) = app.current_view() {
        render_dashboard(frame, body, &view, state.view);
    } else {
        render_message(frame, body, "Press / to search for a location", Color::DarkGray);
    }

    render_search_bar(frame, chunks[1], app);

    if app.show_help {
        render_help_overlay(frame);
    }
}

/// Current conditions on the left, the selected breakdown on the right
fn render_dashboard(frame: &mut Frame, area: Rect, view: &DashboardView, selected: ForecastView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    current::render(frame, columns[0], view);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(columns[1]);

    render_view_tabs(frame, right[0], selected);
    match selected {
        ForecastView::Daily => daily::render(frame, right[1], &view.daily),
        ForecastView::Hourly => hourly::render(frame, right[1], &view.hourly),
    }
}

/// Daily/Hourly toggle
fn render_view_tabs(frame: &mut Frame, area: Rect, selected: ForecastView) {
    let index = match selected {
        ForecastView::Daily => 0,
        ForecastView::Hourly => 1,
    };
    let tabs = Tabs::new(vec!["Daily", "Hourly"])
        .block(Block::default().borders(Borders::ALL))
        .select(index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

/// Renders a single centered status line
fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let text = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);

    frame.render_widget(text, chunks[1]);
}

/// Search field, always visible so a failed lookup can be corrected
fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (content, border) = match app.input_mode {
        InputMode::Editing => (
            Line::from(vec![
                Span::raw(app.input.clone()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Normal => (
            Line::from(Span::styled(
                "Search Location...  (/ to search, Tab to switch view, ? for help)",
                Style::default().fg(Color::DarkGray),
            )),
            Style::default().fg(Color::Gray),
        ),
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
