/// Scale applied to a hovered button.
pub const HOVER_SCALE: f32 = 1.05;

/// Buttons on the page that react to hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    /// Theme toggle in the header.
    ThemeToggle,
    /// Tab button at the given position.
    Tab(usize),
    /// Previous image.
    GalleryPrevious,
    /// Next image.
    GalleryNext,
    /// Form submit.
    Submit,
    /// Secret modal close control.
    CloseModal,
}

/// Tracks which button the pointer is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<ButtonId>,
}

impl HoverState {
    /// Pointer entered `button`. Any previously hovered button is left.
    pub fn enter(&mut self, button: ButtonId) {
        self.hovered = Some(button);
    }

    /// Pointer left every button.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Currently hovered button.
    #[must_use]
    pub const fn hovered(&self) -> Option<ButtonId> {
        self.hovered
    }

    /// Rendering scale of `button`: enlarged while hovered.
    #[must_use]
    pub fn scale(&self, button: ButtonId) -> f32 {
        if self.hovered == Some(button) {
            HOVER_SCALE
        } else {
            1.0
        }
    }
}
