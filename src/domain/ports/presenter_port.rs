//! Presentation adapter port.

use thiserror::Error;

use crate::domain::page::PageView;

/// Presenter failure.
#[derive(Debug, Error)]
pub enum PresentError {
    /// The output device failed.
    #[error("failed to draw page: {0}")]
    Io(#[from] std::io::Error),
    /// The terminal backend reported an error of its own type.
    #[error("terminal backend failed: {0}")]
    Backend(String),
}

/// Draws a full page frame.
pub trait PresenterPort {
    /// Renders `view`, replacing whatever was shown before.
    ///
    /// # Errors
    /// Returns [`PresentError`] if the output device fails.
    fn present(&mut self, view: &PageView<'_>) -> Result<(), PresentError>;
}
