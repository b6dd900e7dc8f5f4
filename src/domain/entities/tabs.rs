use crate::domain::errors::TabError;

/// Tab button paired with the panel it reveals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Content id the button targets.
    pub id: String,
    /// Button label.
    pub label: String,
    /// Panel body.
    pub content: String,
}

impl Tab {
    /// Creates a tab.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content: content.into(),
        }
    }
}

/// Tab buttons and panels with exactly one active pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: usize,
}

impl TabSet {
    /// Creates a tab set with the first tab active.
    ///
    /// # Errors
    /// Returns [`TabError::Empty`] if `tabs` is empty.
    pub fn new(tabs: Vec<Tab>) -> Result<Self, TabError> {
        if tabs.is_empty() {
            return Err(TabError::Empty);
        }
        Ok(Self { tabs, active: 0 })
    }

    /// All tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Position of the active tab.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Active tab.
    #[must_use]
    pub fn active(&self) -> &Tab {
        &self.tabs[self.active]
    }

    /// Activates the tab whose panel carries `id`.
    ///
    /// # Errors
    /// Returns [`TabError::UnknownTab`] and keeps the current tab if no panel matches.
    pub fn select(&mut self, id: &str) -> Result<(), TabError> {
        let index = self
            .tabs
            .iter()
            .position(|tab| tab.id == id)
            .ok_or_else(|| TabError::UnknownTab { id: id.to_string() })?;
        self.active = index;
        Ok(())
    }

    /// Activates the next tab, wrapping around.
    pub fn select_next(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
    }

    /// Activates the previous tab, wrapping around.
    pub fn select_previous(&mut self) {
        self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab_set() -> TabSet {
        TabSet::new(vec![
            Tab::new("tab1", "One", "first"),
            Tab::new("tab2", "Two", "second"),
            Tab::new("tab3", "Three", "third"),
        ])
        .unwrap()
    }

    #[test]
    fn test_select_by_id() {
        let mut tabs = tab_set();
        tabs.select("tab3").unwrap();
        assert_eq!(tabs.active_index(), 2);
        assert_eq!(tabs.active().content, "third");
    }

    #[test]
    fn test_unknown_id_keeps_active() {
        let mut tabs = tab_set();
        tabs.select("tab2").unwrap();

        let err = tabs.select("missing").unwrap_err();
        assert_eq!(
            err,
            TabError::UnknownTab {
                id: "missing".to_string()
            }
        );
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut tabs = tab_set();
        tabs.select_previous();
        assert_eq!(tabs.active_index(), 2);
        tabs.select_next();
        assert_eq!(tabs.active_index(), 0);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(TabSet::new(Vec::new()), Err(TabError::Empty));
    }
}
