use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::{HexColor, KeyInfo};
use crate::presentation::theme::{Theme, to_color};

/// Echo of the last key pressed.
pub struct KeyInfoPanel<'a> {
    key_info: Option<&'a KeyInfo>,
    color: Option<HexColor>,
    theme: &'a Theme,
}

impl<'a> KeyInfoPanel<'a> {
    #[must_use]
    pub const fn new(key_info: Option<&'a KeyInfo>, color: Option<HexColor>, theme: &'a Theme) -> Self {
        Self {
            key_info,
            color,
            theme,
        }
    }
}

impl Widget for KeyInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.primary))
            .title(" Keypress ");

        let line = match self.key_info {
            Some(info) => {
                let style = self
                    .color
                    .map_or_else(Style::default, |c| Style::default().fg(to_color(c)));
                let strong = style.add_modifier(Modifier::BOLD);
                Line::from(vec![
                    Span::styled("Key: ", style),
                    Span::styled(info.key.as_str(), strong),
                    Span::styled(" | Code: ", style),
                    Span::styled(info.code.as_str(), strong),
                    Span::styled(" | KeyCode: ", style),
                    Span::styled(info.key_code.to_string(), strong),
                ])
            }
            None => Line::styled("Press any key to see its details", self.theme.dimmed_style),
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
