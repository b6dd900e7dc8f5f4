//! `rand`-backed color source.

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::entities::HexColor;
use crate::domain::ports::ColorSource;

/// Picks each of the six hex digits uniformly from `0..16`.
#[derive(Debug)]
pub struct RandomColorSource {
    rng: StdRng,
}

impl RandomColorSource {
    /// Creates a source seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColorSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColorSource {
    fn random_color(&mut self) -> HexColor {
        let mut digits = [0u8; 6];
        for digit in &mut digits {
            *digit = self.rng.gen_range(0..16);
        }
        HexColor::from_digits(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RandomColorSource::seeded(7);
        let mut b = RandomColorSource::seeded(7);
        for _ in 0..8 {
            assert_eq!(a.random_color(), b.random_color());
        }
    }

    #[test]
    fn test_colors_format_as_hex() {
        let mut source = RandomColorSource::seeded(42);
        let text = source.random_color().to_string();
        assert_eq!(text.len(), 7);
        assert!(text.starts_with('#'));
        assert!(text[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
