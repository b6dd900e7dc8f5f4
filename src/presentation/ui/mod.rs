//! UI screens.

mod app;
mod hit_map;
mod notification_popup;
mod page_screen;
mod presenter;
mod secret_modal;

pub use app::{App, cycle_focus};
pub use hit_map::{HitMap, HitTarget};
pub use notification_popup::NotificationPopup;
pub use page_screen::PageScreen;
pub use presenter::TerminalPresenter;
pub use secret_modal::SecretModalView;
