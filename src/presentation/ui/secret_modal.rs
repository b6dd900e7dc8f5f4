use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::domain::entities::{ButtonId, HoverState};
use crate::presentation::content::{MODAL_BODY, MODAL_TITLE};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::Button;

const CLOSE_LABEL: &str = "Close";
const POPUP_WIDTH: u16 = 50;
const POPUP_HEIGHT: u16 = 8;

pub struct SecretModalView<'a> {
    hover: &'a HoverState,
    theme: &'a Theme,
}

impl<'a> SecretModalView<'a> {
    #[must_use]
    pub const fn new(hover: &'a HoverState, theme: &'a Theme) -> Self {
        Self { hover, theme }
    }

    /// Popup area and close button area, centered in `area`.
    #[must_use]
    pub fn regions(area: Rect) -> (Rect, Rect) {
        let [row] = Layout::vertical([Constraint::Length(POPUP_HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(POPUP_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);

        let inner = Block::default().borders(Borders::ALL).inner(popup);
        let width = Button::max_width(CLOSE_LABEL).min(inner.width);
        let close = Rect::new(
            inner.x + (inner.width - width) / 2,
            (inner.y + inner.height).saturating_sub(1),
            width,
            u16::from(inner.height > 0),
        );
        (popup, close)
    }
}

impl Widget for SecretModalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (popup, close) = Self::regions(area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.primary))
            .title(format!(" {MODAL_TITLE} "))
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .style(self.theme.base_style());
        let inner = block.inner(popup);
        block.render(popup, buf);

        let body = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        Paragraph::new(MODAL_BODY)
            .wrap(Wrap { trim: true })
            .centered()
            .render(body, buf);

        Button::new(CLOSE_LABEL)
            .scale(self.hover.scale(ButtonId::CloseModal))
            .style(self.theme.button_style())
            .hover_style(self.theme.hover_style)
            .render(close, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_button_inside_popup() {
        let (popup, close) = SecretModalView::regions(Rect::new(0, 0, 100, 40));
        assert_eq!(popup.width, POPUP_WIDTH);
        assert_eq!(popup.height, POPUP_HEIGHT);
        assert!(popup.contains(close.as_position()));
        assert_eq!(close.y, popup.y + popup.height - 2);
    }
}
