//! Accordion widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Widget},
};

use crate::domain::entities::Accordion;
use crate::presentation::theme::Theme;

/// Stacked headers; an open header is followed by its body lines.
pub struct AccordionView<'a> {
    accordion: &'a Accordion,
    theme: &'a Theme,
}

impl<'a> AccordionView<'a> {
    #[must_use]
    pub const fn new(accordion: &'a Accordion, theme: &'a Theme) -> Self {
        Self { accordion, theme }
    }

    /// Rows of the section headers that fit inside `area`.
    #[must_use]
    pub fn header_areas(area: Rect, accordion: &Accordion) -> Vec<Rect> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let bottom = inner.y + inner.height;
        let mut y = inner.y;
        let mut areas = Vec::with_capacity(accordion.len());
        for section in accordion.sections() {
            if y >= bottom {
                break;
            }
            areas.push(Rect::new(inner.x, y, inner.width, 1));
            y += 1;
            if section.is_open() {
                y += u16::try_from(section.body.lines().count()).unwrap_or(u16::MAX);
            }
        }
        areas
    }
}

impl Widget for AccordionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.primary))
            .title(" FAQ ");
        let inner = block.inner(area);
        block.render(area, buf);
        let bottom = inner.y + inner.height;

        let headers = Self::header_areas(area, self.accordion);
        for (section, header) in self.accordion.sections().iter().zip(headers) {
            let (marker, style) = if section.is_open() {
                (
                    "▾",
                    Style::default()
                        .bg(self.theme.primary)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    "▸",
                    Style::default().bg(self.theme.light_gray).fg(self.theme.text),
                )
            };
            buf.set_style(header, style);
            Line::styled(format!("{marker} {}", section.title), style).render(header, buf);

            if section.is_open() {
                for (offset, text) in (1u16..).zip(section.body.lines()) {
                    let y = header.y + offset;
                    if y >= bottom {
                        break;
                    }
                    Line::raw(format!("  {text}"))
                        .render(Rect::new(inner.x, y, inner.width, 1), buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AccordionSection;

    #[test]
    fn test_open_section_pushes_later_headers_down() {
        let mut accordion = Accordion::new(vec![
            AccordionSection::new("First", "line one\nline two"),
            AccordionSection::new("Second", "body"),
        ]);
        let area = Rect::new(0, 0, 30, 10);

        let closed = AccordionView::header_areas(area, &accordion);
        assert_eq!(closed[1].y, 2);

        accordion.toggle(0);
        let open = AccordionView::header_areas(area, &accordion);
        assert_eq!(open[1].y, 4);
    }
}
