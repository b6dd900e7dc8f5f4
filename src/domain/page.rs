//! Aggregate state of the whole page.

use super::entities::{
    Accordion, HexColor, HoverState, KeyInfo, SecretModal, Slide, TabSet, ThemeMode,
};
use super::errors::PageError;
use super::form::ContactForm;
use super::gallery::GalleryState;
use super::notification::Notification;
use super::validation::Field;

/// Everything the page shows, owned in one place.
#[derive(Debug, Clone)]
pub struct PageState {
    /// Active color scheme.
    pub theme: ThemeMode,
    /// Button under the pointer.
    pub hover: HoverState,
    /// Last key pressed, if any.
    pub key_info: Option<KeyInfo>,
    /// Random color of the key echo.
    pub key_color: Option<HexColor>,
    /// Page background set by the long press.
    pub background: Option<HexColor>,
    /// Double-click modal.
    pub modal: SecretModal,
    /// Tab buttons and panels.
    pub tabs: TabSet,
    /// Slideshow images in display order.
    pub slides: Vec<Slide>,
    /// Active slideshow image.
    pub gallery: GalleryState,
    /// FAQ sections.
    pub accordion: Accordion,
    /// Contact form texts and decorations.
    pub form: ContactForm,
    /// Form field with keyboard focus, `None` for the page.
    pub focused_field: Option<Field>,
}

impl PageState {
    /// Builds the initial page: first tab and first image active, form empty.
    ///
    /// # Errors
    /// Returns an error if there are no slides.
    pub fn new(
        theme: ThemeMode,
        tabs: TabSet,
        slides: Vec<Slide>,
        accordion: Accordion,
    ) -> Result<Self, PageError> {
        let gallery = GalleryState::new(slides.len())?;
        Ok(Self {
            theme,
            hover: HoverState::default(),
            key_info: None,
            key_color: None,
            background: None,
            modal: SecretModal::default(),
            tabs,
            slides,
            gallery,
            accordion,
            form: ContactForm::new(),
            focused_field: None,
        })
    }

    /// Slide paired with the active indicator.
    #[must_use]
    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.gallery.active_index()]
    }
}

/// What a presenter draws for one frame.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// Page to draw.
    pub state: &'a PageState,
    /// Acknowledgment shown on top.
    pub notification: Option<&'a Notification>,
}
