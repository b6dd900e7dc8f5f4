//! Application layer with the page controller, events and services.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::PageEvent;
pub use services::notification_manager::NotificationManager;
pub use use_cases::{ControllerSettings, PageController};
