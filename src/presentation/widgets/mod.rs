mod accordion;
mod button;
mod footer_bar;
mod gallery;
mod input;
mod key_info;
mod tabs;

pub use accordion::AccordionView;
pub use button::Button;
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use gallery::{GalleryRegions, GalleryView};
pub use input::{InputEditor, TextInput};
pub use key_info::KeyInfoPanel;
pub use tabs::TabsView;
