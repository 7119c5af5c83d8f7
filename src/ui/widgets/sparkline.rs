//! Single-line sparkline and bar helpers for the dashboard

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const BAR_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Sparkline glyphs for the last `width` values, scaled against `max`
/// (the largest value when `None`).
fn spark_chars(data: &[u64], width: usize, max: Option<u64>) -> impl Iterator<Item = char> + '_ {
    let shown = data.len().min(width);
    let window = &data[data.len() - shown..];
    let max = max
        .unwrap_or_else(|| window.iter().copied().max().unwrap_or(1))
        .max(1);
    window.iter().map(move |&value| {
        let scaled = ((value as f64 / max as f64) * 7.0).round() as usize;
        BAR_CHARS[scaled.min(7)]
    })
}

/// A compact inline sparkline (single line)
pub struct MiniSparkline<'a> {
    data: &'a [u64],
    max: Option<u64>,
    style: Style,
}

impl<'a> MiniSparkline<'a> {
    pub fn new(data: &'a [u64]) -> Self {
        Self {
            data,
            max: None,
            style: Style::default().fg(Color::Cyan),
        }
    }

    pub fn max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<'a> Widget for MiniSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let baseline = area.y + area.height - 1;
        for (i, ch) in spark_chars(self.data, area.width as usize, self.max).enumerate() {
            buf.get_mut(area.x + i as u16, baseline)
                .set_char(ch)
                .set_style(self.style);
        }
    }
}

/// Sparkline as plain text, `width` glyphs at most.
pub fn sparkline_text(data: &[u64], width: usize) -> String {
    spark_chars(data, width, None).collect()
}

/// Horizontal bar of `value / max` scaled to `width` cells.
pub fn bar_text(value: u64, max: u64, width: usize) -> String {
    if max == 0 || width == 0 {
        return String::new();
    }
    let filled = ((value.min(max) as f64 / max as f64) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_text() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let text = sparkline_text(&data, 8);
        assert_eq!(text.chars().count(), 8);
        assert!(text.ends_with('█'));
    }

    #[test]
    fn test_sparkline_text_keeps_latest_values() {
        let text = sparkline_text(&[8, 0, 0], 2);
        assert_eq!(text, "▁▁");
    }

    #[test]
    fn test_sparkline_text_empty() {
        let data: [u64; 0] = [];
        assert!(sparkline_text(&data, 8).is_empty());
    }

    #[test]
    fn test_bar_text() {
        assert_eq!(bar_text(450, 450, 4), "████");
        assert_eq!(bar_text(0, 450, 4), "░░░░");
        assert_eq!(bar_text(225, 450, 4), "██░░");
        assert!(bar_text(1, 0, 4).is_empty());
    }
}
