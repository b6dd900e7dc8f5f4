/// Hidden modal revealed by a double click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecretModal {
    visible: bool,
}

impl SecretModal {
    /// Reveals the modal.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the modal. Returns whether it was visible.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Returns whether the modal is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}
