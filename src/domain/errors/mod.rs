//! Domain error types.

mod page_error;

pub use page_error::{GalleryError, PageError, TabError, TimerError};
