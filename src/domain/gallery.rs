//! Slideshow position bookkeeping.

use super::errors::GalleryError;

/// Navigation direction through the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One image forward, wrapping to the first image.
    Next,
    /// One image back, wrapping to the last image.
    Previous,
}

/// Current image of a fixed, ordered sequence of images.
///
/// The index is always in `[0, len)`. Each image is paired with one indicator
/// at the same position, so a single index selects both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    len: usize,
    current: usize,
}

impl GalleryState {
    /// Creates a slideshow over `len` images showing the first one.
    ///
    /// # Errors
    /// Returns [`GalleryError::Empty`] if `len` is zero.
    pub const fn new(len: usize) -> Result<Self, GalleryError> {
        if len == 0 {
            return Err(GalleryError::Empty);
        }
        Ok(Self { len, current: 0 })
    }

    /// Number of images.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; an empty gallery cannot be built.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Index of the active image and indicator.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.current
    }

    /// Returns whether image (and indicator) `index` is marked active.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.current == index
    }

    /// Marks image `index` and its indicator active, deselecting all others.
    ///
    /// # Errors
    /// Returns [`GalleryError::IndexOutOfRange`] and leaves the state untouched
    /// if `index` is not a legal position.
    pub fn show_image(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.len {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Moves one step in `direction`, wrapping around at both ends.
    pub fn advance(&mut self, direction: Direction) {
        let next = match direction {
            Direction::Next => (self.current + 1) % self.len,
            Direction::Previous => (self.current + self.len - 1) % self.len,
        };
        self.current = next;
    }

    /// Jumps straight to the image paired with indicator `index`.
    ///
    /// # Errors
    /// Returns [`GalleryError::IndexOutOfRange`] if the indicator index is stale.
    pub fn select_index(&mut self, index: usize) -> Result<(), GalleryError> {
        self.show_image(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_gallery_rejected() {
        assert_eq!(GalleryState::new(0), Err(GalleryError::Empty));
    }

    #[test]
    fn test_show_image_marks_exactly_one_active() {
        let mut gallery = GalleryState::new(4).unwrap();
        for index in 0..4 {
            gallery.show_image(index).unwrap();
            let active: Vec<usize> = (0..4).filter(|&i| gallery.is_active(i)).collect();
            assert_eq!(active, vec![index]);
            assert_eq!(gallery.active_index(), index);
        }
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut gallery = GalleryState::new(3).unwrap();
        gallery.show_image(2).unwrap();
        gallery.advance(Direction::Next);
        assert_eq!(gallery.active_index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut gallery = GalleryState::new(3).unwrap();
        gallery.advance(Direction::Previous);
        assert_eq!(gallery.active_index(), 2);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut gallery = GalleryState::new(5).unwrap();
        gallery.show_image(3).unwrap();
        for _ in 0..gallery.len() {
            gallery.advance(Direction::Next);
        }
        assert_eq!(gallery.active_index(), 3);
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut gallery = GalleryState::new(1).unwrap();
        gallery.advance(Direction::Next);
        assert_eq!(gallery.active_index(), 0);
        gallery.advance(Direction::Previous);
        assert_eq!(gallery.active_index(), 0);
    }

    #[test]
    fn test_out_of_range_selection_is_rejected() {
        let mut gallery = GalleryState::new(3).unwrap();
        gallery.show_image(1).unwrap();

        let err = gallery.select_index(7).unwrap_err();
        assert_eq!(err, GalleryError::IndexOutOfRange { index: 7, len: 3 });
        assert_eq!(gallery.active_index(), 1);
    }
}
