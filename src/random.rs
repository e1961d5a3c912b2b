//! This module implements uniformly random colors. A random color here is a random point in HSV
//! space, all three channels drawn independently from [0, 1), which skews vivid compared to picking
//! random RGB bytes and is usually what people want from "just give me a color". The support comes
//! in two flavors: the [`RandomColor`] entry point for the common case, and a
//! [`Distribution`](rand::distributions::Distribution) impl so `HSVColor` works with the whole
//! `rand` toolkit, seeded generators included.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::colors::HSVColor;

/// A source of uniformly random colors. This type has no state of its own; it draws from the
/// thread's random number generator.
///
/// # Example
///
/// ```
/// use cerise::prelude::*;
///
/// let surprise = RandomColor::rand();
/// assert!(surprise.hue() >= 0.0 && surprise.hue() < 1.0);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct RandomColor;

impl RandomColor {
    /// Draws a fresh random color: hue, saturation, and value each uniform on [0, 1). The result
    /// is an ordinary [`HSVColor`] and behaves like any other.
    pub fn rand() -> HSVColor {
        rand::random()
    }
}

impl Distribution<HSVColor> for Standard {
    /// Samples a uniformly random HSV color from any generator, so `rng.gen::<HSVColor>()` works
    /// wherever `rng` comes from, reproducible seeded generators included.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> HSVColor {
        HSVColor::from_channels(rng.gen(), rng.gen(), rng.gen())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_channels_stay_in_range() {
        for _ in 0..200 {
            let color = RandomColor::rand();
            assert!(color.hue() >= 0.0 && color.hue() < 1.0);
            assert!(color.saturation() >= 0.0 && color.saturation() < 1.0);
            assert!(color.value() >= 0.0 && color.value() < 1.0);
            // and the color is usable like any other
            let rgb = color.rgb();
            assert!(rgb.red() >= 0.0 && rgb.red() <= 255.0);
        }
    }

    #[test]
    fn test_draws_are_distinct() {
        // three f64 channels colliding across two draws has probability zero for
        // any working generator
        let a = RandomColor::rand();
        let b = RandomColor::rand();
        assert_ne!(a.to_array(), b.to_array());
    }

    #[test]
    fn test_works_with_seeded_generators() {
        let mut rng = StdRng::seed_from_u64(7);
        let first: HSVColor = rng.gen();
        assert!(first.hue() >= 0.0 && first.hue() < 1.0);
        // the same seed replays the same color
        let mut replay = StdRng::seed_from_u64(7);
        let again: HSVColor = replay.gen();
        assert_eq!(first.to_array(), again.to_array());
    }
}
