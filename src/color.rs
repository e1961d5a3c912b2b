//! This module defines the things every color in this crate has in common: the [`Color`] trait,
//! which gives each color representation conversions to every other one, channel arithmetic, and
//! blend operations, as well as [`RGBColor`], the representation all of those operations actually
//! work in. The other representations live in the [`colors`](../colors/index.html) module and get
//! all of this for free by saying how to become an `RGBColor`.
//!
//! Arithmetic deserves a word. Adding, subtracting, multiplying, dividing, screening, and so on are
//! defined channel by channel on the RGB forms of the operands, whatever representations you start
//! with, and the answer is always an `RGBColor`. This matches how image editors blend layers and
//! means a hex color plus an HSV color is a perfectly reasonable thing to write. Addition and
//! subtraction clamp to the valid channel range instead of failing; division can't, because the
//! quotient of two valid channels has no natural ceiling, so it returns a `Result` instead of
//! implementing the `/` operator.

use std::error::Error;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use num::{Num, NumCast};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::colors::{HSVColor, HexColor};
use crate::colorsys;

/// An error that arises from constructing or combining colors. Every fallible operation in this
/// crate reports one of these.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ColorError {
    /// A channel fell outside the range its representation allows: an RGB channel outside 0-255, or
    /// a saturation or value outside 0-1. Division produces this when the quotient overflows the
    /// channel range.
    Range,
    /// A hex code string didn't consist of exactly six hexadecimal digits.
    Format,
    /// Division was attempted by a color with at least one zero channel.
    DivisionByZero,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::Range => write!(f, "Channel value outside the allowed range"),
            ColorError::Format => write!(f, "Malformed hex color code"),
            ColorError::DivisionByZero => write!(f, "Division by a color with a zero channel"),
        }
    }
}

impl Error for ColorError {}

/// A trait that includes any numeric type that can sensibly become a channel value: any integer or
/// float works. Constructors accept these so that `RGBColor::new(255, 0, 0)` and
/// `RGBColor::new(254.5, 0.0, 0.0)` both read naturally.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

mod private {
    use super::RGBColor;
    use crate::colors::{HSVColor, HexColor};

    /// The implementors of this trait are the full set of color representations this crate will
    /// ever compare or combine, which is what lets cross-representation equality and arithmetic be
    /// total. Nothing outside the crate can add to the set.
    pub trait Sealed {}

    impl Sealed for RGBColor {}
    impl Sealed for HSVColor {}
    impl Sealed for HexColor {}
}

/// A color, in any of the representations this crate knows about. Everything a color can do that
/// doesn't depend on which representation it's in lives here: conversions to each representation,
/// and the blend operations that don't have a matching operator. This trait is sealed, so the three
/// implementors in this crate are the whole story.
///
/// The arithmetic operators `+`, `-`, and `*` are implemented on every pair of color types rather
/// than here, because operator traits want concrete output types. They follow the same recipe as
/// the methods below: convert both sides to RGB, combine channel by channel, return an
/// [`RGBColor`].
///
/// # Example
///
/// ```
/// use cerise::prelude::*;
///
/// let sea = RGBColor::new(70, 130, 180).unwrap();
/// // conversions come from the trait, whatever the starting representation
/// assert_eq!(sea.hex().code(), "4682b4");
/// assert!(sea.hsv().value() > 0.7);
/// ```
pub trait Color: private::Sealed + Copy {
    /// Returns this color as an [`RGBColor`], converting if necessary. This is the canonical form:
    /// equality and arithmetic both go through it.
    fn rgb(&self) -> RGBColor;
    /// Returns this color as an [`HSVColor`], converting if necessary.
    fn hsv(&self) -> HSVColor;
    /// Returns this color as a [`HexColor`]. Fractional channels are cut off at the integer part,
    /// the same truncation that writing a byte as two hex digits implies.
    fn hex(&self) -> HexColor {
        let rgb = self.rgb();
        HexColor::from((rgb.red() as u8, rgb.green() as u8, rgb.blue() as u8))
    }

    /// Divides this color's channels by `other`'s, channel by channel. Unlike the clamping
    /// operators this can fail two ways: dividing by a color with any zero channel is an error, and
    /// so is a quotient channel that overflows the 0-255 range.
    ///
    /// # Example
    ///
    /// ```
    /// use cerise::prelude::*;
    ///
    /// let gray = RGBColor::new(100, 100, 100).unwrap();
    /// let dim = RGBColor::new(50, 50, 50).unwrap();
    /// assert_eq!(gray.divide(&dim).unwrap(), RGBColor::new(2, 2, 2).unwrap());
    /// assert_eq!(
    ///     gray.divide(&RGBColor::new(0, 1, 1).unwrap()),
    ///     Err(ColorError::DivisionByZero)
    /// );
    /// ```
    fn divide<C: Color>(&self, other: &C) -> Result<RGBColor, ColorError> {
        let divisor = other.rgb().to_array();
        if divisor.contains(&0.0) {
            return Err(ColorError::DivisionByZero);
        }
        let dividend = self.rgb().to_array();
        RGBColor::new(
            dividend[0] / divisor[0],
            dividend[1] / divisor[1],
            dividend[2] / divisor[2],
        )
    }

    /// Blends two colors with the screen mode: each output channel is `255 - (255 - a) * (255 - b)
    /// / 255`. Screening always brightens, the way projecting two slides onto the same surface
    /// would.
    fn screen<C: Color>(&self, other: &C) -> RGBColor {
        channelwise(self, other, |a, b| 255.0 - (255.0 - a) * (255.0 - b) / 255.0)
    }

    /// Blends two colors by taking the absolute difference of each channel pair. Identical colors
    /// difference to black.
    fn difference<C: Color>(&self, other: &C) -> RGBColor {
        channelwise(self, other, |a, b| (a - b).abs())
    }

    /// Blends two colors with the overlay mode: the product of the two colors, screened onto this
    /// one. Roughly, `other` retints `self` while dark stays dark and light stays light.
    fn overlay<C: Color>(&self, other: &C) -> RGBColor {
        self.screen(&multiply(self, other))
    }

    /// Returns the photographic negative of this color: its difference from white.
    ///
    /// # Example
    ///
    /// ```
    /// use cerise::prelude::*;
    ///
    /// let hex = HexColor::new("646464").unwrap();
    /// assert_eq!(hex.invert(), RGBColor::new(155, 155, 155).unwrap());
    /// ```
    fn invert(&self) -> RGBColor {
        self.difference(&RGBColor::from((255, 255, 255)))
    }
}

/// A color in the RGB color space, represented as red, green, and blue channels that each range
/// from 0 to 255. Channels are kept as floats so that arithmetic doesn't quietly round: a third of
/// the way from black to white is 85, not "85-ish". The constructor enforces the channel range, so
/// any `RGBColor` you can get your hands on is valid.
#[derive(Debug, Copy, Clone, Serialize)]
pub struct RGBColor {
    red: f64,
    green: f64,
    blue: f64,
}

impl RGBColor {
    /// Creates an `RGBColor` from three channel values, which can be any numeric type. Returns
    /// [`ColorError::Range`] unless every channel lands inside 0-255.
    ///
    /// # Example
    ///
    /// ```
    /// use cerise::prelude::*;
    ///
    /// let salmon = RGBColor::new(250, 128, 114).unwrap();
    /// assert_eq!(salmon.red(), 250.0);
    /// assert_eq!(RGBColor::new(300, 0, 0), Err(ColorError::Range));
    /// ```
    pub fn new<T: Scalar>(red: T, green: T, blue: T) -> Result<RGBColor, ColorError> {
        // a scalar that won't cast to f64 acts like any other out-of-range input
        let red: f64 = num::cast(red).unwrap_or(f64::NAN);
        let green: f64 = num::cast(green).unwrap_or(f64::NAN);
        let blue: f64 = num::cast(blue).unwrap_or(f64::NAN);
        for channel in &[red, green, blue] {
            // written so NaN fails too
            if !(*channel >= 0.0 && *channel <= 255.0) {
                return Err(ColorError::Range);
            }
        }
        Ok(RGBColor { red, green, blue })
    }

    /// Builds an `RGBColor` from channels already known to be in range, skipping validation. Every
    /// caller is on the hook for that invariant, which the conversion math upholds by construction.
    pub(crate) fn from_channels(red: f64, green: f64, blue: f64) -> RGBColor {
        debug_assert!(
            red >= 0.0
                && red <= 255.0
                && green >= 0.0
                && green <= 255.0
                && blue >= 0.0
                && blue <= 255.0,
            "channel out of range: ({}, {}, {})",
            red,
            green,
            blue
        );
        RGBColor { red, green, blue }
    }

    /// Returns the red channel, between 0 and 255.
    pub fn red(&self) -> f64 {
        self.red
    }

    /// Returns the green channel, between 0 and 255.
    pub fn green(&self) -> f64 {
        self.green
    }

    /// Returns the blue channel, between 0 and 255.
    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// Returns the channels as a `[red, green, blue]` array, handy for iterating or destructuring.
    pub fn to_array(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Color for RGBColor {
    fn rgb(&self) -> RGBColor {
        *self
    }

    fn hsv(&self) -> HSVColor {
        let (h, s, v) =
            colorsys::rgb_to_hsv(self.red / 255.0, self.green / 255.0, self.blue / 255.0);
        HSVColor::from_channels(h, s, v)
    }
}

impl Default for RGBColor {
    /// All channels zero: black.
    fn default() -> RGBColor {
        RGBColor::from_channels(0.0, 0.0, 0.0)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        // .into() rather than f64::from: NumCast is in scope here and also answers to `from`
        RGBColor::from_channels(r.into(), g.into(), b.into())
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<RGBColor red: {}, green: {}, blue: {}>",
            self.red, self.green, self.blue
        )
    }
}

// Deserialization funnels through `new`, so out-of-range channels in the input are an error
// rather than an invalid color. The derive would store whatever numbers it found.
impl<'de> Deserialize<'de> for RGBColor {
    fn deserialize<D>(deserializer: D) -> Result<RGBColor, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Channels {
            red: f64,
            green: f64,
            blue: f64,
        }
        let channels = Channels::deserialize(deserializer)?;
        RGBColor::new(channels.red, channels.green, channels.blue).map_err(de::Error::custom)
    }
}

/// Combines two colors channel by channel in RGB, applying `op` to each pair of channels. All the
/// infallible arithmetic in the crate bottoms out here, so every `op` must map valid channels to a
/// valid channel.
fn channelwise<A: Color, B: Color, F: Fn(f64, f64) -> f64>(a: &A, b: &B, op: F) -> RGBColor {
    let lhs = a.rgb().to_array();
    let rhs = b.rgb().to_array();
    RGBColor::from_channels(op(lhs[0], rhs[0]), op(lhs[1], rhs[1]), op(lhs[2], rhs[2]))
}

/// The multiply blend: channel products rescaled back into range. Used by both the `*` operator and
/// overlay.
fn multiply<A: Color, B: Color>(a: &A, b: &B) -> RGBColor {
    channelwise(a, b, |x, y| x * y / 255.0)
}

// The operators and equality read the same for every representation: convert to RGB, work channel
// by channel. A macro keeps the type-by-type impls from being written out longhand.
macro_rules! channel_ops {
    ($($color:ty),*) => {
        $(
            impl<C: Color> Add<C> for $color {
                type Output = RGBColor;

                /// Adds the colors channel by channel, clamping each sum at 255.
                fn add(self, other: C) -> RGBColor {
                    channelwise(&self, &other, |a, b| (a + b).min(255.0))
                }
            }

            impl<C: Color> Sub<C> for $color {
                type Output = RGBColor;

                /// Subtracts the colors channel by channel, clamping each difference at 0.
                fn sub(self, other: C) -> RGBColor {
                    channelwise(&self, &other, |a, b| (a - b).max(0.0))
                }
            }

            impl<C: Color> Mul<C> for $color {
                type Output = RGBColor;

                /// Multiplies the colors channel by channel, rescaled by 255 so that white is the
                /// identity and black annihilates.
                fn mul(self, other: C) -> RGBColor {
                    multiply(&self, &other)
                }
            }

            impl<C: Color> PartialEq<C> for $color {
                /// Colors compare equal when their RGB forms match exactly, whatever
                /// representations the two sides use.
                fn eq(&self, other: &C) -> bool {
                    self.rgb().to_array() == other.rgb().to_array()
                }
            }
        )*
    };
}

channel_ops!(RGBColor, HSVColor, HexColor);
