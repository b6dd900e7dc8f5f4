//! Text input widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::{Decoration, Field};

/// Text input field widget with its validation message underneath.
///
/// Needs four rows: three for the bordered input, one for the message.
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    label: &'a str,
    value: &'a str,
    cursor: Option<usize>,
    masked: bool,
    decoration: Option<&'a Decoration>,
    border_style: Style,
    focus_style: Style,
    valid_color: Color,
    invalid_color: Color,
}

impl<'a> TextInput<'a> {
    /// Creates new input with label and current value.
    #[must_use]
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            cursor: None,
            masked: false,
            decoration: None,
            border_style: Style::default().fg(Color::Gray),
            focus_style: Style::default().fg(Color::Cyan),
            valid_color: Color::Green,
            invalid_color: Color::Red,
        }
    }

    /// Enables password masking.
    #[must_use]
    pub const fn password(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Marks the input focused with the cursor at character `cursor`.
    #[must_use]
    pub const fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Sets the validity decoration.
    #[must_use]
    pub const fn decoration(mut self, decoration: Option<&'a Decoration>) -> Self {
        self.decoration = decoration;
        self
    }

    /// Sets border styles for the unfocused and focused states.
    #[must_use]
    pub const fn border_styles(mut self, normal: Style, focused: Style) -> Self {
        self.border_style = normal;
        self.focus_style = focused;
        self
    }

    /// Sets the colors used for valid and invalid tags.
    #[must_use]
    pub const fn validity_colors(mut self, valid: Color, invalid: Color) -> Self {
        self.valid_color = valid;
        self.invalid_color = invalid;
        self
    }

    fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        }
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input_area = Rect {
            height: area.height.min(3),
            ..area
        };

        let border_style = match (self.cursor.is_some(), self.decoration) {
            (true, _) => self.focus_style,
            (false, Some(Decoration::Valid(_))) => Style::default().fg(self.valid_color),
            (false, Some(Decoration::Invalid(_))) => Style::default().fg(self.invalid_color),
            (false, None) => self.border_style,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label);
        let inner = block.inner(input_area);

        let display = self.display_text();
        let scroll = self
            .cursor
            .map_or(0, |c| c.saturating_sub(usize::from(inner.width.saturating_sub(1))));
        let visible: String = display.chars().skip(scroll).collect();

        block.render(input_area, buf);
        Paragraph::new(visible).render(inner, buf);

        if let Some(cursor) = self.cursor
            && inner.width > 0
        {
            let offset = u16::try_from(cursor - scroll).unwrap_or(u16::MAX);
            let cursor_x = inner.x.saturating_add(offset);
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }

        if area.height > 3
            && let Some(decoration) = self.decoration
        {
            let color = if decoration.is_valid() {
                self.valid_color
            } else {
                self.invalid_color
            };
            let message_area = Rect::new(area.x + 1, area.y + 3, area.width.saturating_sub(1), 1);
            Line::styled(decoration.message(), Style::default().fg(color)).render(message_area, buf);
        }
    }
}

/// Cursor positions and line editing for the four form fields.
///
/// Text lives in the page state. The editor only tracks where the cursor is
/// and turns key presses into the field's new full text.
#[derive(Debug, Clone, Default)]
pub struct InputEditor {
    cursors: [usize; 4],
}

impl InputEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor of `field`, clamped to the length of `text`.
    #[must_use]
    pub fn cursor(&self, field: Field, text: &str) -> usize {
        self.cursors[field.index()].min(text.chars().count())
    }

    /// Applies an editing key. Returns the new text if it changed.
    pub fn apply(&mut self, field: Field, text: &str, key: KeyEvent) -> Option<String> {
        let len = text.chars().count();
        let cursor = self.cursor(field, text);
        let mut chars: Vec<char> = text.chars().collect();

        let (new_cursor, changed) = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                chars.insert(cursor, c);
                (cursor + 1, true)
            }
            KeyCode::Backspace if cursor > 0 => {
                chars.remove(cursor - 1);
                (cursor - 1, true)
            }
            KeyCode::Delete if cursor < len => {
                chars.remove(cursor);
                (cursor, true)
            }
            KeyCode::Left => (cursor.saturating_sub(1), false),
            KeyCode::Right => ((cursor + 1).min(len), false),
            KeyCode::Home => (0, false),
            KeyCode::End => (len, false),
            _ => (cursor, false),
        };

        self.cursors[field.index()] = new_cursor;
        changed.then(|| chars.into_iter().collect())
    }
}
