//! Presentation layer with UI components and event handling.

/// Key bindings.
pub mod commands;
/// Built-in page text.
pub mod content;
/// Event handling.
pub mod events;
/// Color palette.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::{App, TerminalPresenter};
