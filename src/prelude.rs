//! This module simply brings the common Cerise functionality under a single namespace, to prevent
//! excessive imports. It includes the [`Color`] trait, all three color representations, the error
//! type, the bundled palettes, and the color generators: in other words, the whole public surface,
//! since this crate is small enough that there's nothing worth leaving out.

pub use crate::color::{Color, ColorError, RGBColor, Scalar};
pub use crate::colors::{HSVColor, HexChannel, HexColor};
pub use crate::palette::{Palette, PRIMARY, RAINBOW, W3C};
pub use crate::random::RandomColor;
pub use crate::wheel::ColorWheel;
