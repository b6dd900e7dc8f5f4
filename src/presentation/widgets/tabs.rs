//! Tab strip with its active panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::button::Button;
use crate::domain::entities::{ButtonId, HoverState, TabSet};
use crate::presentation::theme::Theme;

/// Tab buttons on the first row, the active panel below.
pub struct TabsView<'a> {
    tabs: &'a TabSet,
    hover: &'a HoverState,
    theme: &'a Theme,
}

impl<'a> TabsView<'a> {
    #[must_use]
    pub const fn new(tabs: &'a TabSet, hover: &'a HoverState, theme: &'a Theme) -> Self {
        Self { tabs, hover, theme }
    }

    /// Areas of the tab buttons, left to right. Buttons that do not fit are dropped.
    #[must_use]
    pub fn button_areas(area: Rect, tabs: &TabSet) -> Vec<Rect> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let right = inner.x + inner.width;
        let mut x = inner.x;
        let mut areas = Vec::with_capacity(tabs.tabs().len());
        for tab in tabs.tabs() {
            let width = Button::max_width(&tab.label);
            if x + width > right {
                break;
            }
            areas.push(Rect::new(x, inner.y, width, 1));
            x += width + 1;
        }
        areas
    }
}

impl Widget for TabsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.primary))
            .title(" Tabs ");
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, rect) in Self::button_areas(area, self.tabs).into_iter().enumerate() {
            let tab = &self.tabs.tabs()[i];
            let style = if i == self.tabs.active_index() {
                self.theme.active_style
            } else {
                Style::default().bg(self.theme.light_gray).fg(self.theme.text)
            };
            Button::new(&tab.label)
                .scale(self.hover.scale(ButtonId::Tab(i)))
                .style(style)
                .hover_style(self.theme.hover_style)
                .render(rect, buf);
        }

        if inner.height > 2 {
            let panel = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 2);
            Paragraph::new(self.tabs.active().content.as_str())
                .wrap(Wrap { trim: true })
                .render(panel, buf);
        }
    }
}
