//! Event handling.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::entities::KeyInfo;

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Terminal key helpers.
pub struct EventHandler;

impl EventHandler {
    /// Checks for the quit chord that works in every focus state.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }
}

/// Describes a key press the way a browser keyboard event would.
#[must_use]
pub fn key_info(key: &KeyEvent) -> KeyInfo {
    let (name, code, key_code): (String, String, u32) = match key.code {
        KeyCode::Char(' ') => (" ".into(), "Space".into(), 32),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            let upper = c.to_ascii_uppercase();
            (c.to_string(), format!("Key{upper}"), u32::from(upper))
        }
        KeyCode::Char(c) if c.is_ascii_digit() => (c.to_string(), format!("Digit{c}"), u32::from(c)),
        KeyCode::Char(c) => {
            let (code, key_code) = punctuation(c).unwrap_or(("Unidentified", 0));
            (c.to_string(), code.into(), key_code)
        }
        KeyCode::Enter => ("Enter".into(), "Enter".into(), 13),
        KeyCode::Tab | KeyCode::BackTab => ("Tab".into(), "Tab".into(), 9),
        KeyCode::Backspace => ("Backspace".into(), "Backspace".into(), 8),
        KeyCode::Esc => ("Escape".into(), "Escape".into(), 27),
        KeyCode::Left => ("ArrowLeft".into(), "ArrowLeft".into(), 37),
        KeyCode::Up => ("ArrowUp".into(), "ArrowUp".into(), 38),
        KeyCode::Right => ("ArrowRight".into(), "ArrowRight".into(), 39),
        KeyCode::Down => ("ArrowDown".into(), "ArrowDown".into(), 40),
        KeyCode::PageUp => ("PageUp".into(), "PageUp".into(), 33),
        KeyCode::PageDown => ("PageDown".into(), "PageDown".into(), 34),
        KeyCode::End => ("End".into(), "End".into(), 35),
        KeyCode::Home => ("Home".into(), "Home".into(), 36),
        KeyCode::Insert => ("Insert".into(), "Insert".into(), 45),
        KeyCode::Delete => ("Delete".into(), "Delete".into(), 46),
        KeyCode::F(n) => (format!("F{n}"), format!("F{n}"), 111 + u32::from(n)),
        _ => ("Unidentified".into(), "Unidentified".into(), 0),
    };
    KeyInfo::new(name, code, key_code)
}

fn punctuation(c: char) -> Option<(&'static str, u32)> {
    Some(match c {
        ';' | ':' => ("Semicolon", 186),
        '=' | '+' => ("Equal", 187),
        ',' | '<' => ("Comma", 188),
        '-' | '_' => ("Minus", 189),
        '.' | '>' => ("Period", 190),
        '/' | '?' => ("Slash", 191),
        '`' | '~' => ("Backquote", 192),
        '[' | '{' => ("BracketLeft", 219),
        '\\' | '|' => ("Backslash", 220),
        ']' | '}' => ("BracketRight", 221),
        '\'' | '"' => ("Quote", 222),
        _ => return None,
    })
}

/// Pairs primary presses into double clicks.
///
/// Two presses form a double click when they land on the same cell within
/// the window. A completed pair is consumed, so a third press starts over.
#[derive(Debug, Clone)]
pub struct DoubleClickDetector {
    window: Duration,
    last: Option<(Duration, u16, u16)>,
}

impl DoubleClickDetector {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Records a press at `(column, row)` and reports whether it completes a double click.
    pub fn press(&mut self, now: Duration, column: u16, row: u16) -> bool {
        match self.last.take() {
            Some((at, c, r))
                if c == column && r == row && now.saturating_sub(at) <= self.window =>
            {
                true
            }
            _ => {
                self.last = Some((now, column, row));
                false
            }
        }
    }
}
