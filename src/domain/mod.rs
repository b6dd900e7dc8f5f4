//! Domain layer with page state, validation predicates and port definitions.

/// Page entities (theme, tabs, accordion, key echo, hover, modal).
pub mod entities;
/// Error types.
pub mod errors;
/// Contact form state.
pub mod form;
/// Slideshow state.
pub mod gallery;
/// Keybinding definitions.
pub mod keybinding;
/// Long-press detection.
pub mod long_press;
/// Acknowledgment records.
pub mod notification;
/// Aggregate page state.
pub mod page;
/// Port definitions.
pub mod ports;
/// Cancellable timers driven by host time.
pub mod timer;
/// Field validation predicates.
pub mod validation;

pub use errors::{GalleryError, PageError, TabError, TimerError};
pub use form::{ContactForm, Decoration, SubmitOutcome};
pub use gallery::{Direction, GalleryState};
pub use notification::{Notification, NotificationLevel};
pub use page::{PageState, PageView};
pub use validation::{Field, Validity};
