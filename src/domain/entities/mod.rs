//! Domain entity definitions.

mod accordion;
mod hover;
mod key_info;
mod modal;
mod slide;
mod tabs;
mod theme_mode;

pub use accordion::{Accordion, AccordionSection};
pub use hover::{ButtonId, HoverState};
pub use key_info::{HexColor, KeyInfo};
pub use modal::SecretModal;
pub use slide::Slide;
pub use tabs::{Tab, TabSet};
pub use theme_mode::ThemeMode;
