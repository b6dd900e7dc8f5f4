//! Page error types.

use std::time::Duration;

use thiserror::Error;

/// Slideshow error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The slideshow was built without any images.
    #[error("gallery must contain at least one image")]
    Empty,

    /// An index outside `[0, len)` was requested.
    #[error("image index {index} out of range for gallery of {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of images.
        len: usize,
    },
}

/// Tab navigation error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    /// No panel carries the requested content id.
    #[error("no tab panel with id `{id}`")]
    UnknownTab {
        /// Requested content id.
        id: String,
    },

    /// The tab set was built without any tabs.
    #[error("tab set must contain at least one tab")]
    Empty,
}

/// Timer error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A repeating timer needs a non-zero period.
    #[error("repeating timer period must be non-zero, got {period:?}")]
    ZeroPeriod {
        /// Rejected period.
        period: Duration,
    },
}

/// Any error raised while dispatching a page event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum PageError {
    #[error(transparent)]
    Gallery(#[from] GalleryError),

    #[error(transparent)]
    Tab(#[from] TabError),

    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error("accordion section {index} out of range for {len} sections")]
    AccordionOutOfRange { index: usize, len: usize },
}

impl PageError {
    /// Returns whether the error stems from bad input rather than a broken page.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Tab(TabError::UnknownTab { .. })
                | Self::Gallery(GalleryError::IndexOutOfRange { .. })
                | Self::AccordionOutOfRange { .. }
        )
    }
}
