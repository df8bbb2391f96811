use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;
use crate::rectangle::Rectangle;

///
/// Uniform source for rectangle placement and colors
///
/// Seeded from system entropy unless a seed is given.
///
pub struct RandomSource {
    generator: SmallRng,
}

impl RandomSource {
    pub fn new() -> Self {
        Self {
            generator: SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: SmallRng::seed_from_u64(seed),
        }
    }

    /// Integer in `0..range`, zero for empty range.
    pub fn int(&mut self, range: u32) -> u32 {
        if range == 0 {
            return 0;
        }

        self.generator.gen_range(0..range)
    }

    /// Opaque color with every channel in `0.0..1.0`.
    pub fn color(&mut self) -> Color {
        Color::rgb(self.generator.gen(), self.generator.gen(), self.generator.gen())
    }

    pub fn rectangle(&mut self, range: u32) -> Rectangle {
        Rectangle::new(
            self.int(range) as f32,
            self.int(range) as f32,
            self.int(range) as f32,
            self.int(range) as f32,
        )
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_in_unit_range() {
        let mut source = RandomSource::with_seed(7);

        for _ in 0..10_000 {
            let c = source.color();

            for channel in [c.r, c.g, c.b] {
                assert!((0.0..1.0).contains(&channel));
            }
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn ints_below_range() {
        let mut source = RandomSource::new();

        for _ in 0..10_000 {
            assert!(source.int(300) < 300);
        }

        assert_eq!(source.int(0), 0);
        assert_eq!(source.int(1), 0);
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = RandomSource::with_seed(42);
        let mut b = RandomSource::with_seed(42);

        for _ in 0..100 {
            assert_eq!(a.rectangle(300), b.rectangle(300));
            assert_eq!(a.color(), b.color());
        }
    }
}
