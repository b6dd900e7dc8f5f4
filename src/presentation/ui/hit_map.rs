//! Clickable regions of the last drawn frame.

use ratatui::layout::{Position, Rect};

use crate::domain::Field;
use crate::domain::entities::ButtonId;

/// What sits under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Button(ButtonId),
    Indicator(usize),
    AccordionHeader(usize),
    Field(Field),
}

impl HitTarget {
    /// Button that reacts to hovering this target, if any.
    #[must_use]
    pub const fn hover_button(self) -> Option<ButtonId> {
        match self {
            Self::Button(id) => Some(id),
            _ => None,
        }
    }
}

/// Regions in draw order. Later regions sit on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.area() > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target containing the cell.
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_region_wins() {
        let mut map = HitMap::new();
        map.push(Rect::new(0, 0, 10, 10), HitTarget::Field(Field::Name));
        map.push(Rect::new(2, 2, 3, 1), HitTarget::Button(ButtonId::Submit));

        assert_eq!(
            map.target_at(3, 2),
            Some(HitTarget::Button(ButtonId::Submit))
        );
        assert_eq!(map.target_at(0, 0), Some(HitTarget::Field(Field::Name)));
        assert_eq!(map.target_at(20, 0), None);
    }

    #[test]
    fn test_empty_areas_are_skipped() {
        let mut map = HitMap::new();
        map.push(Rect::new(0, 0, 0, 5), HitTarget::Indicator(0));
        assert!(map.is_empty());
    }
}
