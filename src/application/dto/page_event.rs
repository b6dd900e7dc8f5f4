//! Page events.

use crate::domain::Field;
use crate::domain::entities::{ButtonId, KeyInfo};

/// Discrete user or timer event delivered to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Theme toggle button clicked.
    ToggleTheme,
    /// Pointer entered a button.
    HoverEnter(ButtonId),
    /// Pointer left every button.
    HoverLeave,
    /// A key went down anywhere on the page.
    KeyDown(KeyInfo),
    /// Double click anywhere on the page.
    DoubleClick,
    /// Secret modal close control clicked.
    CloseModal,
    /// Pointer pressed anywhere on the page.
    PointerDown,
    /// Pointer released anywhere on the page.
    PointerUp,
    /// Tab button targeting the given content id clicked.
    SelectTab(String),
    /// Move to the next tab.
    NextTab,
    /// Move to the previous tab.
    PreviousTab,
    /// Previous image button clicked.
    PreviousImage,
    /// Next image button clicked.
    NextImage,
    /// Gallery indicator carrying the given index clicked.
    SelectIndicator(usize),
    /// Accordion header at the given position clicked.
    ToggleAccordion(usize),
    /// A form field's text changed.
    FieldInput {
        /// Edited field.
        field: Field,
        /// Full new text.
        text: String,
    },
    /// Keyboard focus moved to a field, or back to the page.
    Focus(Option<Field>),
    /// Form submitted.
    Submit,
    /// Acknowledgment dismissed.
    DismissNotification,
    /// Timer heartbeat from the host.
    Tick,
}
