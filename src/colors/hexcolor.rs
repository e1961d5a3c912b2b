//! This module implements hex color codes, the six-digit strings everyone has copied out of a
//! design tool at some point. A [`HexColor`] is a real color representation here, not just a
//! formatting of RGB: it remembers the exact digits it was built from, capitalization included, so
//! a code round-trips through this type byte for byte. Converting any other color *to* hex always
//! produces lowercase digits.

use std::fmt;
use std::str;
use std::str::FromStr;

use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{Color, ColorError, RGBColor};
use crate::colors::HSVColor;

lazy_static! {
    static ref HEX_CODE: Regex = Regex::new("^[0-9a-fA-F]{6}$").unwrap();
}

/// One channel of a hex color: exactly two hexadecimal digits, kept in whatever case they arrived
/// in. Displays as those two digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HexChannel([u8; 2]);

impl HexChannel {
    /// Encodes a byte as two lowercase hex digits.
    fn from_byte(byte: u8) -> HexChannel {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        HexChannel([
            DIGITS[(byte >> 4) as usize],
            DIGITS[(byte & 0xf) as usize],
        ])
    }

    /// Returns the two digits as a string slice.
    pub fn as_str(&self) -> &str {
        // the constructors only store ASCII hex digits. Panicking here indicates a bug.
        str::from_utf8(&self.0).unwrap()
    }

    /// Returns the numeric value of the channel, between 0 and 255.
    pub fn byte(&self) -> u8 {
        u8::from_str_radix(self.as_str(), 16).unwrap()
    }
}

impl fmt::Display for HexChannel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for HexChannel {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A color represented as a six-digit hexadecimal code, two digits per channel, like `"ff7f50"`.
/// The digits are validated at construction and preserved exactly as given, so `"FF7F50"` and
/// `"ff7f50"` are the same color but keep their own spellings.
///
/// # Example
///
/// ```
/// use cerise::prelude::*;
///
/// let coral: HexColor = "ff7f50".parse().unwrap();
/// assert_eq!(coral, RGBColor::new(255, 127, 80).unwrap());
/// assert!(HexColor::new("ff7f5").is_err());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct HexColor {
    red: HexChannel,
    green: HexChannel,
    blue: HexChannel,
}

impl HexColor {
    /// Creates a `HexColor` from a string of exactly six hexadecimal digits, upper or lower case.
    /// Anything else, including `#`-prefixed or three-digit shorthand codes, returns
    /// [`ColorError::Format`].
    pub fn new(code: &str) -> Result<HexColor, ColorError> {
        if !HEX_CODE.is_match(code) {
            return Err(ColorError::Format);
        }
        // six ASCII digits, so byte indexing is safe
        let digits = code.as_bytes();
        Ok(HexColor {
            red: HexChannel([digits[0], digits[1]]),
            green: HexChannel([digits[2], digits[3]]),
            blue: HexChannel([digits[4], digits[5]]),
        })
    }

    /// Returns the red channel's two digits.
    pub fn red(&self) -> HexChannel {
        self.red
    }

    /// Returns the green channel's two digits.
    pub fn green(&self) -> HexChannel {
        self.green
    }

    /// Returns the blue channel's two digits.
    pub fn blue(&self) -> HexChannel {
        self.blue
    }

    /// Returns the full six-digit code, in the same case it was built with.
    pub fn code(&self) -> String {
        format!("{}{}{}", self.red, self.green, self.blue)
    }

    /// Returns the channels as a `[red, green, blue]` array of digit pairs.
    pub fn to_array(&self) -> [HexChannel; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Color for HexColor {
    fn rgb(&self) -> RGBColor {
        RGBColor::from_channels(
            f64::from(self.red.byte()),
            f64::from(self.green.byte()),
            f64::from(self.blue.byte()),
        )
    }

    fn hsv(&self) -> HSVColor {
        self.rgb().hsv()
    }

    /// A hex color is already hex: this returns it unchanged, original case and all.
    fn hex(&self) -> HexColor {
        *self
    }
}

impl Default for HexColor {
    /// The code `"000000"`: black.
    fn default() -> HexColor {
        HexColor::from((0, 0, 0))
    }
}

impl From<(u8, u8, u8)> for HexColor {
    fn from(rgb: (u8, u8, u8)) -> HexColor {
        let (r, g, b) = rgb;
        HexColor {
            red: HexChannel::from_byte(r),
            green: HexChannel::from_byte(g),
            blue: HexChannel::from_byte(b),
        }
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<HexColor, ColorError> {
        HexColor::new(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<HexColor red: {}, green: {}, blue: {}>",
            self.red, self.green, self.blue
        )
    }
}

// Serialized as the bare code string rather than a struct: "ff7f50" is how hex colors appear in
// config files and APIs.
impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.code())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<HexColor, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        HexColor::new(&code).map_err(de::Error::custom)
    }
}
