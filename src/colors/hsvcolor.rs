//! This module implements the HSV color space: hue, saturation, and value, the cylindrical
//! remapping of RGB that picks colors the way people think about them. Unlike the degree-based hue
//! you may know from CSS, everything here lives between 0 and 1, with hue measured as a fraction of
//! a full turn around the color wheel. That makes "walk around the wheel" code a matter of plain
//! addition, which is exactly what [`ColorWheel`](../../wheel/struct.ColorWheel.html) does with
//! these.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::color::{Color, ColorError, RGBColor, Scalar};
use crate::colorsys;

/// Folds a hue at or above a full turn back into the unit interval by dropping its integer part.
/// Hues below 1, including negative ones, pass through untouched: the conversion math treats them
/// modulo a turn anyway.
fn wrap_hue(hue: f64) -> f64 {
    if hue >= 1.0 {
        hue - hue.trunc()
    } else {
        hue
    }
}

/// A color in the HSV color space: a hue that is a fraction of a full turn, and saturation and
/// value that each range between 0 and 1. The constructor enforces those ranges for saturation and
/// value and normalizes overlarge hues, so conversions out of a stored `HSVColor` always succeed.
///
/// # Example
///
/// ```
/// use cerise::prelude::*;
///
/// let tangerine = HSVColor::new(0.11, 0.85, 1.0).unwrap();
/// // a full extra turn of hue lands on the same color
/// let looped = HSVColor::new(1.11, 0.85, 1.0).unwrap();
/// assert!((looped.hue() - tangerine.hue()).abs() < 1e-9);
/// ```
#[derive(Debug, Copy, Clone, Serialize)]
pub struct HSVColor {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl HSVColor {
    /// Creates an `HSVColor` from hue, saturation, and value, which can be any numeric type.
    /// Saturation and value must land between 0 and 1 or this returns [`ColorError::Range`]. A hue
    /// of 1 or more is folded back into the unit interval by dropping its integer part; a negative
    /// hue is kept as is, since it still names an angle. NaN and infinite hues name no angle and
    /// are refused.
    pub fn new<T: Scalar>(hue: T, saturation: T, value: T) -> Result<HSVColor, ColorError> {
        // a scalar that won't cast to f64 acts like any other out-of-range input
        let hue: f64 = num::cast(hue).unwrap_or(f64::NAN);
        let saturation: f64 = num::cast(saturation).unwrap_or(f64::NAN);
        let value: f64 = num::cast(value).unwrap_or(f64::NAN);
        if !hue.is_finite() {
            return Err(ColorError::Range);
        }
        for channel in &[saturation, value] {
            // written so NaN fails too
            if !(*channel >= 0.0 && *channel <= 1.0) {
                return Err(ColorError::Range);
            }
        }
        Ok(HSVColor {
            hue: wrap_hue(hue),
            saturation,
            value,
        })
    }

    /// Builds an `HSVColor` from channels already known to be in range, skipping the saturation and
    /// value checks. Hue still gets folded, so callers can hand in a running total.
    pub(crate) fn from_channels(hue: f64, saturation: f64, value: f64) -> HSVColor {
        debug_assert!(
            hue.is_finite() && saturation >= 0.0 && saturation <= 1.0 && value >= 0.0 && value <= 1.0,
            "bad HSV channels: ({}, {}, {})",
            hue,
            saturation,
            value
        );
        HSVColor {
            hue: wrap_hue(hue),
            saturation,
            value,
        }
    }

    /// Returns the hue, as a fraction of a full turn. Below 1, but possibly negative.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Returns the saturation, between 0 (grayscale) and 1 (fully saturated).
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Returns the value, between 0 (black) and 1 (as bright as the hue gets).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the channels as a `[hue, saturation, value]` array.
    pub fn to_array(&self) -> [f64; 3] {
        [self.hue, self.saturation, self.value]
    }
}

impl Color for HSVColor {
    fn rgb(&self) -> RGBColor {
        let (r, g, b) = colorsys::hsv_to_rgb(self.hue, self.saturation, self.value);
        RGBColor::from_channels(r * 255.0, g * 255.0, b * 255.0)
    }

    fn hsv(&self) -> HSVColor {
        *self
    }
}

impl Default for HSVColor {
    /// All channels zero: black, hueless and unsaturated.
    fn default() -> HSVColor {
        HSVColor {
            hue: 0.0,
            saturation: 0.0,
            value: 0.0,
        }
    }
}

impl fmt::Display for HSVColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<HSVColor hue: {}, saturation: {}, value: {}>",
            self.hue, self.saturation, self.value
        )
    }
}

// Deserialization funnels through `new`: out-of-range saturation or value is an error, and an
// overlarge hue folds exactly as it would at construction.
impl<'de> Deserialize<'de> for HSVColor {
    fn deserialize<D>(deserializer: D) -> Result<HSVColor, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Channels {
            hue: f64,
            saturation: f64,
            value: f64,
        }
        let channels = Channels::deserialize(deserializer)?;
        HSVColor::new(channels.hue, channels.saturation, channels.value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_construction_wraps_hue() {
        let c = HSVColor::new(1.2, 0.5, 0.5).unwrap();
        assert!(approx_eq!(f64, c.hue(), 0.2, epsilon = 1e-9));
        let c = HSVColor::new(2.75, 0.5, 0.5).unwrap();
        assert!(approx_eq!(f64, c.hue(), 0.75, epsilon = 1e-9));
        let c = HSVColor::new(1.0, 0.5, 0.5).unwrap();
        assert_eq!(c.hue(), 0.0);
        // hues under a full turn pass through untouched, even negative ones
        let c = HSVColor::new(0.999, 0.5, 0.5).unwrap();
        assert_eq!(c.hue(), 0.999);
        let c = HSVColor::new(-0.25, 0.5, 0.5).unwrap();
        assert_eq!(c.hue(), -0.25);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(HSVColor::new(0.0, 1.5, 0.5), Err(ColorError::Range));
        assert_eq!(HSVColor::new(0.0, 0.5, 1.01), Err(ColorError::Range));
        assert_eq!(HSVColor::new(0.0, -0.1, 0.5), Err(ColorError::Range));
        assert_eq!(HSVColor::new(0.0, 0.5, -2.0), Err(ColorError::Range));
        assert_eq!(HSVColor::new(0.0, f64::NAN, 0.5), Err(ColorError::Range));
        // a hue that names no angle is refused too
        assert_eq!(HSVColor::new(f64::NAN, 0.5, 0.5), Err(ColorError::Range));
        assert_eq!(HSVColor::new(f64::INFINITY, 0.5, 0.5), Err(ColorError::Range));
        // the boundaries themselves are fine
        assert!(HSVColor::new(0, 1, 1).is_ok());
        assert!(HSVColor::new(0, 0, 0).is_ok());
    }

    #[test]
    fn test_accessors() {
        let c = HSVColor::new(0.11, 0.85, 0.3).unwrap();
        assert_eq!(c.hue(), 0.11);
        assert_eq!(c.saturation(), 0.85);
        assert_eq!(c.value(), 0.3);
        assert_eq!(c.to_array(), [0.11, 0.85, 0.3]);
        assert_eq!(HSVColor::default().to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsv_to_rgb_conversion() {
        let red = HSVColor::new(0, 1, 1).unwrap();
        let rgb = red.rgb();
        assert_eq!(rgb, RGBColor::new(255, 0, 0).unwrap());
        assert_eq!(red.hex().code(), "ff0000");
    }

    #[test]
    fn test_hsv_identity() {
        let c = HSVColor::new(0.11, 0.85, 0.3).unwrap();
        let same = c.hsv();
        assert_eq!(same.to_array(), c.to_array());
    }

    #[test]
    fn test_display() {
        let red = HSVColor::new(0, 1, 1).unwrap();
        assert_eq!(red.to_string(), "<HSVColor hue: 0, saturation: 1, value: 1>");
        let c = HSVColor::new(0.5, 0.25, 0.75).unwrap();
        assert_eq!(
            c.to_string(),
            "<HSVColor hue: 0.5, saturation: 0.25, value: 0.75>"
        );
    }

    #[test]
    fn test_round_trip_through_rgb() {
        let c = HSVColor::new(0.35, 0.5, 0.8).unwrap();
        let back = c.rgb().hsv();
        assert!(approx_eq!(f64, back.hue(), 0.35, epsilon = 1e-12));
        assert!(approx_eq!(f64, back.saturation(), 0.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, back.value(), 0.8, epsilon = 1e-12));
    }

    #[test]
    fn test_serde_round_trip() {
        let c = HSVColor::new(0.11, 0.85, 0.3).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"hue":0.11,"saturation":0.85,"value":0.3}"#);
        let back: HSVColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_array(), c.to_array());
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        // deserialized input passes through the same validation as the constructor, so a color
        // that couldn't be built can't be smuggled in as data either
        let wild = r#"{"hue":0.0,"saturation":3.0,"value":1.0}"#;
        assert!(serde_json::from_str::<HSVColor>(wild).is_err());
        let negative = r#"{"hue":0.0,"saturation":0.5,"value":-0.5}"#;
        assert!(serde_json::from_str::<HSVColor>(negative).is_err());
        // an overlarge hue isn't an error: it folds, same as the constructor
        let folded = r#"{"hue":1.25,"saturation":0.5,"value":0.5}"#;
        let looped: HSVColor = serde_json::from_str(folded).unwrap();
        assert_eq!(looped.hue(), 0.25);
    }
}
