use serde::{Deserialize, Serialize};

/// One image of the slideshow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Short title drawn over the image.
    pub title: String,
    /// Caption shown under the image.
    #[serde(default)]
    pub caption: String,
}

impl Slide {
    /// Creates a slide.
    #[must_use]
    pub fn new(title: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: caption.into(),
        }
    }
}
