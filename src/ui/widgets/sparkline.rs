//! Temperature sparkline widget for the hourly window

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Block characters for different temperatures (8 levels)
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A sparkline widget showing temperatures over the window, scaled between
/// the coldest and warmest value
pub struct TempSparkline<'a> {
    /// Temperature for each slot
    temps: &'a [f64],
    /// Index of the first slot taken from tomorrow
    day_break: Option<usize>,
    /// Style for today's slots
    style: Style,
    /// Style for tomorrow's slots
    tomorrow_style: Style,
}

impl<'a> TempSparkline<'a> {
    pub fn new(temps: &'a [f64]) -> Self {
        Self {
            temps,
            day_break: None,
            style: Style::default().fg(Color::Yellow),
            tomorrow_style: Style::default().fg(Color::Cyan),
        }
    }

    pub fn day_break(mut self, index: usize) -> Self {
        self.day_break = Some(index);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn range(&self) -> (f64, f64) {
        let min = self.temps.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }

    fn temp_to_block(&self, temp: f64, min: f64, max: f64) -> char {
        let span = (max - min).max(0.001);
        let normalized = ((temp - min) / span).clamp(0.0, 1.0);
        let index = ((normalized * 7.0).round() as usize).min(7);
        BLOCKS[index]
    }
}

impl<'a> Widget for TempSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.temps.is_empty() {
            return;
        }

        let (min, max) = self.range();
        let width = area.width as usize;

        for (i, temp) in self.temps.iter().take(width).enumerate() {
            let block = self.temp_to_block(*temp, min, max);
            let x = area.x + i as u16;
            let y = area.y;

            let style = match self.day_break {
                Some(start) if i >= start => self.tomorrow_style,
                _ => self.style,
            };

            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(block).set_style(style);
            }
        }
    }
}
