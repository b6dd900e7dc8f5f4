//! Slideshow widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::button::Button;
use crate::domain::GalleryState;
use crate::domain::entities::{ButtonId, HoverState, Slide};
use crate::presentation::theme::Theme;

const PREVIOUS_LABEL: &str = "‹ Prev";
const NEXT_LABEL: &str = "Next ›";
const INDICATOR_WIDTH: u16 = 2;

const SLIDE_COLORS: [Color; 6] = [
    Color::Rgb(52, 152, 219),
    Color::Rgb(46, 204, 113),
    Color::Rgb(155, 89, 182),
    Color::Rgb(230, 126, 34),
    Color::Rgb(26, 188, 156),
    Color::Rgb(231, 76, 60),
];

/// Where the parts of the slideshow land inside its area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRegions {
    pub image: Rect,
    pub previous: Rect,
    pub next: Rect,
    /// Image index and area of each drawn indicator, left to right.
    pub indicators: Vec<(usize, Rect)>,
}

impl GalleryRegions {
    /// Lays out the slideshow. Indicators shrink to one cell when the spaced
    /// row does not fit; past that a window around the active image is shown.
    #[must_use]
    pub fn compute(area: Rect, gallery: &GalleryState) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let [image, controls] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);
        let [previous, dots, next] = Layout::horizontal([
            Constraint::Length(Button::max_width(PREVIOUS_LABEL)),
            Constraint::Fill(1),
            Constraint::Length(Button::max_width(NEXT_LABEL)),
        ])
        .areas(controls);

        let len = gallery.len();
        let available = usize::from(dots.width);
        let cell = if len * usize::from(INDICATOR_WIDTH) <= available {
            INDICATOR_WIDTH
        } else {
            1
        };
        let shown = len.min(available / usize::from(cell));
        let first = gallery
            .active_index()
            .saturating_sub(shown / 2)
            .min(len - shown);

        let count = u16::try_from(shown).unwrap_or(u16::MAX);
        let start = dots.x + (dots.width - count * cell) / 2;
        let indicators = (first..first + shown)
            .zip((0..count).map(|i| start + i * cell))
            .map(|(index, x)| (index, Rect::new(x, dots.y, cell, 1)))
            .collect();

        Self {
            image,
            previous,
            next,
            indicators,
        }
    }
}

/// Active image, previous/next buttons and one indicator per image.
pub struct GalleryView<'a> {
    slides: &'a [Slide],
    gallery: &'a GalleryState,
    hover: &'a HoverState,
    theme: &'a Theme,
}

impl<'a> GalleryView<'a> {
    #[must_use]
    pub const fn new(
        slides: &'a [Slide],
        gallery: &'a GalleryState,
        hover: &'a HoverState,
        theme: &'a Theme,
    ) -> Self {
        Self {
            slides,
            gallery,
            hover,
            theme,
        }
    }

    fn render_image(&self, area: Rect, buf: &mut Buffer) {
        let index = self.gallery.active_index();
        let Some(slide) = self.slides.get(index) else {
            return;
        };
        let color = SLIDE_COLORS[index % SLIDE_COLORS.len()];
        let style = Style::default().bg(color).fg(Color::White);

        let top_padding = area.height.saturating_sub(3) / 2;
        let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::raw("")).collect();
        lines.push(Line::styled(
            slide.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            slide.caption.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::raw(format!("{} / {}", index + 1, self.gallery.len())));

        Paragraph::new(Text::from(lines).centered())
            .style(style)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for GalleryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let regions = GalleryRegions::compute(area, self.gallery);

        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.primary))
            .title(" Gallery ")
            .render(area, buf);

        self.render_image(regions.image, buf);

        let button = |label: &'static str, id: ButtonId| {
            Button::new(label)
                .scale(self.hover.scale(id))
                .style(self.theme.button_style())
                .hover_style(self.theme.hover_style)
        };
        button(PREVIOUS_LABEL, ButtonId::GalleryPrevious).render(regions.previous, buf);
        button(NEXT_LABEL, ButtonId::GalleryNext).render(regions.next, buf);

        for &(index, rect) in &regions.indicators {
            let (symbol, style) = if self.gallery.is_active(index) {
                ("●", Style::default().fg(self.theme.primary))
            } else {
                ("○", self.theme.dimmed_style)
            };
            Span::styled(symbol, style).render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ThemeMode;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n).map(|i| Slide::new(format!("S{i}"), "")).collect()
    }

    fn active_indicators(regions: &GalleryRegions, gallery: &GalleryState) -> Vec<usize> {
        regions
            .indicators
            .iter()
            .map(|&(index, _)| index)
            .filter(|&index| gallery.is_active(index))
            .collect()
    }

    #[test]
    fn test_one_indicator_per_image() {
        let gallery = GalleryState::new(4).unwrap();
        let regions = GalleryRegions::compute(Rect::new(0, 0, 40, 10), &gallery);
        assert_eq!(regions.indicators.len(), 4);
        assert!(regions.indicators.windows(2).all(|w| w[0].1.x < w[1].1.x));
        assert!(regions.indicators.iter().all(|(_, r)| r.width == INDICATOR_WIDTH));
    }

    #[test]
    fn test_crowded_row_keeps_every_image() {
        let mut gallery = GalleryState::new(10).unwrap();
        gallery.show_image(9).unwrap();
        let regions = GalleryRegions::compute(Rect::new(40, 0, 40, 12), &gallery);

        assert_eq!(regions.indicators.len(), 10);
        assert_eq!(active_indicators(&regions, &gallery), vec![9]);
    }

    #[test]
    fn test_overflowing_row_windows_around_active() {
        let mut gallery = GalleryState::new(50).unwrap();
        let area = Rect::new(0, 0, 40, 12);

        for active in [0, 25, 49] {
            gallery.show_image(active).unwrap();
            let regions = GalleryRegions::compute(area, &gallery);
            let indexes: Vec<usize> = regions.indicators.iter().map(|&(i, _)| i).collect();

            assert!(indexes.len() < 50);
            assert!(indexes.windows(2).all(|w| w[1] == w[0] + 1));
            assert_eq!(active_indicators(&regions, &gallery), vec![active]);
        }
    }

    #[test]
    fn test_only_active_indicator_is_filled() {
        let slides = slides(3);
        let mut gallery = GalleryState::new(3).unwrap();
        gallery.show_image(1).unwrap();
        let hover = HoverState::default();
        let theme = Theme::new("#3498db", ThemeMode::Light);

        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        GalleryView::new(&slides, &gallery, &hover, &theme).render(area, &mut buf);

        let regions = GalleryRegions::compute(area, &gallery);
        let symbols: Vec<&str> = regions
            .indicators
            .iter()
            .map(|(_, r)| buf[(r.x, r.y)].symbol())
            .collect();
        assert_eq!(symbols, vec!["○", "●", "○"]);
    }
}
