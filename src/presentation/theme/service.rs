use super::adapter::ColorConverter;
use crate::domain::entities::{HexColor, ThemeMode};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Resolved palette for one color scheme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    pub primary: Color,
    pub background: Color,
    pub text: Color,
    pub light_gray: Color,
    pub valid: Color,
    pub invalid: Color,
    pub dimmed_style: Style,
    pub hover_style: Style,
    pub active_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#3498db", ThemeMode::Light)
    }
}

impl Theme {
    pub fn new(accent_color_str: &str, mode: ThemeMode) -> Self {
        Self::from_color(parse_color(accent_color_str), mode)
    }

    #[must_use]
    pub fn from_color(accent: Color, mode: ThemeMode) -> Self {
        let primary = if mode.is_dark() {
            ColorConverter::lighten(accent, 0.15)
        } else {
            accent
        };
        let hover_bg = ColorConverter::lighten(primary, 0.1);

        let (background, text, light_gray) = match mode {
            ThemeMode::Light => (
                Color::Rgb(244, 244, 244),
                Color::Rgb(51, 51, 51),
                Color::Rgb(221, 221, 221),
            ),
            ThemeMode::Dark => (
                Color::Rgb(18, 18, 18),
                Color::Rgb(240, 240, 240),
                Color::Rgb(58, 58, 58),
            ),
        };

        Self {
            mode,
            primary,
            background,
            text,
            light_gray,
            valid: Color::Rgb(46, 204, 113),
            invalid: Color::Rgb(231, 76, 60),
            dimmed_style: Style::default().fg(Color::DarkGray),
            hover_style: Style::default()
                .bg(hover_bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            active_style: Style::default()
                .bg(primary)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Base style for the page canvas.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    /// Plain button style.
    #[must_use]
    pub fn button_style(&self) -> Style {
        Style::default().bg(self.primary).fg(Color::White)
    }
}

#[must_use]
pub const fn to_color(color: HexColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

#[must_use]
pub fn parse_color(s: &str) -> Color {
    if let Ok(c) = HexColor::from_str(s) {
        return to_color(c);
    }

    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_short_hex(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Blue,
    }
}

fn parse_short_hex(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() || s.len() != 3 {
        return Err(());
    }

    let expand = |i: usize| u8::from_str_radix(&s[i..=i].repeat(2), 16).map_err(|_| ());
    Ok((expand(0)?, expand(1)?, expand(2)?))
}
