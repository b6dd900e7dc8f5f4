//! Built-in page content.

use crate::domain::TabError;
use crate::domain::entities::{Accordion, AccordionSection, Tab, TabSet};

/// Title of the secret modal.
pub const MODAL_TITLE: &str = "You found a secret!";

/// Body of the secret modal.
pub const MODAL_BODY: &str = "Double clicks reveal hidden things. Press Esc or Close to go back.";

/// The three default tabs, first one active.
///
/// # Errors
/// Never fails for the built-in list; the error comes from [`TabSet::new`].
pub fn default_tabs() -> Result<TabSet, TabError> {
    TabSet::new(vec![
        Tab::new(
            "tab1",
            "About",
            "A small playground of interactive widgets. Hover the buttons, press keys, \
             and try double clicking or holding the mouse down anywhere.",
        ),
        Tab::new(
            "tab2",
            "Skills",
            "Theme switching, a slideshow with indicators, tabs, an accordion and a \
             contact form with live validation.",
        ),
        Tab::new(
            "tab3",
            "Contact",
            "Fill in the form below. Every field is checked while you type and again \
             when you submit.",
        ),
    ])
}

/// The default accordion, all sections closed.
#[must_use]
pub fn default_accordion() -> Accordion {
    Accordion::new(vec![
        AccordionSection::new(
            "What is this?",
            "A terminal rendition of an interactive web page.\nEvery control works with the mouse and the keyboard.",
        ),
        AccordionSection::new(
            "How do I change the theme?",
            "Click the toggle button in the header or press t.",
        ),
        AccordionSection::new(
            "Are there secrets?",
            "Try a double click.\nThen try holding the mouse button for a second.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content() {
        let tabs = default_tabs().unwrap();
        assert_eq!(tabs.active().id, "tab1");
        assert_eq!(tabs.tabs().len(), 3);

        let accordion = default_accordion();
        assert!(accordion.sections().iter().all(|s| !s.is_open()));
    }
}
