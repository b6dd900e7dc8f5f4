//! Hover-aware push button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Push button drawn as a padded label.
///
/// A scale above 1.0 widens the padding by one cell on each side.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    scale: f32,
    style: Style,
    hover_style: Style,
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            scale: 1.0,
            style: Style::default(),
            hover_style: Style::default(),
        }
    }

    #[must_use]
    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn hover_style(mut self, style: Style) -> Self {
        self.hover_style = style;
        self
    }

    fn is_scaled(&self) -> bool {
        self.scale > 1.0
    }

    /// Widest the button can get, used to reserve layout space.
    #[must_use]
    pub fn max_width(label: &str) -> u16 {
        u16::try_from(label.width()).unwrap_or(u16::MAX).saturating_add(4)
    }

    fn text(&self) -> String {
        if self.is_scaled() {
            format!("  {}  ", self.label)
        } else {
            format!(" {} ", self.label)
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.area() == 0 {
            return;
        }
        let text = self.text();
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX).min(area.width);
        let x = area.x + (area.width - width) / 2;
        let target = Rect::new(x, area.y, width, 1);

        let style = if self.is_scaled() {
            self.hover_style
        } else {
            self.style
        };
        Line::styled(text, style).render(target, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_hovered_button_is_wider() {
        let area = Rect::new(0, 0, 12, 1);

        let mut plain = Buffer::empty(area);
        Button::new("Go").render(area, &mut plain);
        assert_eq!(row(&plain, 0), "     Go     ");

        let mut hovered = Buffer::empty(area);
        Button::new("Go").scale(1.05).render(area, &mut hovered);
        assert_eq!(row(&hovered, 0).trim(), "Go");
        assert_eq!(Button::new("Go").scale(1.05).text(), "  Go  ");
    }

    #[test]
    fn test_max_width() {
        assert_eq!(Button::max_width("Next"), 8);
    }
}
