/// One collapsible header/content pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionSection {
    /// Header text.
    pub title: String,
    /// Body revealed when open.
    pub body: String,
    open: bool,
}

impl AccordionSection {
    /// Creates a closed section.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            open: false,
        }
    }

    /// Returns whether the content is expanded.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

/// Independently toggled sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    sections: Vec<AccordionSection>,
}

impl Accordion {
    /// Creates an accordion with every section closed.
    #[must_use]
    pub fn new(sections: Vec<AccordionSection>) -> Self {
        Self { sections }
    }

    /// Sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[AccordionSection] {
        &self.sections
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns whether there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Flips section `index`. Returns the new open state, or `None` if out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let section = self.sections.get_mut(index)?;
        section.open = !section.open;
        Some(section.open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_toggle_independently() {
        let mut accordion = Accordion::new(vec![
            AccordionSection::new("A", "a"),
            AccordionSection::new("B", "b"),
        ]);

        assert_eq!(accordion.toggle(0), Some(true));
        assert_eq!(accordion.toggle(1), Some(true));
        assert_eq!(accordion.toggle(0), Some(false));
        assert!(!accordion.sections()[0].is_open());
        assert!(accordion.sections()[1].is_open());
        assert_eq!(accordion.toggle(5), None);
    }
}
