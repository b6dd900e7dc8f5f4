//! Random color port.

use crate::domain::entities::HexColor;

/// Produces random `#RRGGBB` colors.
#[cfg_attr(test, mockall::automock)]
pub trait ColorSource: Send {
    /// Returns a color built from six random hex digits.
    fn random_color(&mut self) -> HexColor;
}
