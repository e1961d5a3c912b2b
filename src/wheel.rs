//! This module implements a color wheel walker: an endless supply of vivid colors that are
//! guaranteed to look different from their neighbors. Each step moves a random distance between a
//! tenth and a fifth of the way around the hue circle, far enough that consecutive colors never
//! blur together but irregular enough that the sequence doesn't feel like a gradient. Chart series,
//! avatar backgrounds, and anything else that needs "n distinguishable colors" can just take n of
//! these.

use rand::Rng;

use crate::colors::HSVColor;

/// Wraps a phase that has walked past a full turn back down, subtracting a single turn. Phases
/// under 1 pass through.
fn wrapped(phase: f64) -> f64 {
    if phase >= 1.0 {
        phase - 1.0
    } else {
        phase
    }
}

/// An endless iterator of bright, fully saturated colors spaced unevenly around the hue circle.
/// The wheel yields [`HSVColor`]s with saturation 1 and value 0.8; only the hue changes, advancing
/// by a fresh random amount in the range [0.1, 0.2) on every step using the thread's random number
/// generator.
///
/// This iterator never ends, so always bound it with something like
/// [`take`](std::iter::Iterator::take).
///
/// # Example
///
/// ```
/// use cerise::prelude::*;
///
/// let swatches: Vec<HSVColor> = ColorWheel::default().take(4).collect();
/// assert_eq!(swatches.len(), 4);
/// for color in &swatches {
///     assert_eq!(color.saturation(), 1.0);
///     assert_eq!(color.value(), 0.8);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ColorWheel {
    phase: f64,
}

impl ColorWheel {
    /// Creates a wheel positioned at `start`, a fraction of a full turn. The first color yielded
    /// sits one random step past `start`. A start of 1 or more has a single turn subtracted, so
    /// only starts below 2 end up as true fractions; sillier values take a few steps to walk back
    /// into range, which matches how the wheel has always behaved rather than any deliberate
    /// cleverness.
    pub fn new(start: f64) -> ColorWheel {
        ColorWheel {
            phase: wrapped(start),
        }
    }
}

impl Default for ColorWheel {
    /// A wheel starting at the top of the hue circle, which is red.
    fn default() -> ColorWheel {
        ColorWheel::new(0.0)
    }
}

impl Iterator for ColorWheel {
    type Item = HSVColor;

    fn next(&mut self) -> Option<HSVColor> {
        self.phase = wrapped(self.phase + rand::thread_rng().gen_range(0.1..0.2));
        Some(HSVColor::from_channels(self.phase, 1.0, 0.8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
