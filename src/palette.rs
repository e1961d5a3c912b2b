//! This module implements named color palettes: fixed tables that map human names to
//! [`RGBColor`]s. Three ship with the crate. [`struct@PRIMARY`] holds the five painting-class
//! basics, [`struct@RAINBOW`] the seven classic rainbow stripes, and [`struct@W3C`] the full set of
//! 147 color keywords from the CSS3 specification, loaded from a table bundled into the binary.
//! Each palette is built lazily on first touch and then lives for the rest of the program, so
//! handing out `&'static` references to its colors is free.
//!
//! Lookups are case-insensitive, because `"RED"`, `"Red"`, and `"red"` all obviously mean red.

use std::collections::HashMap;

use serde::Deserialize;

use crate::color::RGBColor;

/// A named table of colors. The bundled palettes are the only way to get one of these; they're
/// exposed as statics below, so a `Palette` mostly shows up behind a reference.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<String, RGBColor>,
}

/// One row of the bundled CSS3 color table.
#[derive(Debug, Deserialize)]
struct Record {
    name: String,
    red: u8,
    green: u8,
    blue: u8,
}

impl Palette {
    /// Builds a palette from a literal name-to-channels table. Names are stored lowercase.
    fn from_table(table: HashMap<&'static str, (u8, u8, u8)>) -> Palette {
        Palette {
            colors: table
                .into_iter()
                .map(|(name, channels)| (name.to_ascii_lowercase(), RGBColor::from(channels)))
                .collect(),
        }
    }

    /// Builds a palette from CSV text with `name,red,green,blue` rows. Names are stored lowercase.
    fn from_csv(data: &str) -> Palette {
        let mut colors = HashMap::new();
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        for row in reader.deserialize() {
            // the data ships inside the crate, so we should panic on a bad row: it's a bug
            let record: Record = row.unwrap();
            colors.insert(
                record.name.to_ascii_lowercase(),
                RGBColor::from((record.red, record.green, record.blue)),
            );
        }
        Palette { colors }
    }

    /// Looks up a color by name, ignoring case. Returns `None` for names the palette doesn't have.
    /// The reference borrows from the palette itself, so for the bundled statics it lives as long
    /// as the program does.
    ///
    /// # Example
    ///
    /// ```
    /// use cerise::prelude::*;
    ///
    /// let lime = RGBColor::new(0, 255, 0).unwrap();
    /// assert_eq!(PRIMARY.get("green"), Some(&lime));
    /// assert_eq!(PRIMARY.get("GREEN"), Some(&lime));
    /// assert_eq!(PRIMARY.get("chartreuse"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&RGBColor> {
        self.colors.get(&name.to_ascii_lowercase())
    }

    /// Returns every name in the palette, lowercase. The order is arbitrary but stays put for a
    /// given palette within one run; sort it if you need something presentable.
    pub fn names(&self) -> Vec<&str> {
        self.colors.keys().map(|name| name.as_str()).collect()
    }

    /// Returns how many colors the palette holds.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette holds no colors. None of the bundled palettes are empty; this
    /// exists because a `len` without an `is_empty` is a lint and a half.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

lazy_static! {
    /// The five schoolroom basics: black, white, and full-intensity red, green, and blue.
    pub static ref PRIMARY: Palette = Palette::from_table(hashmap! {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 255, 0),
        "blue" => (0, 0, 255),
    });

    /// The seven classic rainbow stripes, red through violet. Note that these are the traditional
    /// mnemonic colors, not evenly spaced hues: green here is the half-intensity CSS green, and
    /// indigo and violet are their usual dusky selves.
    pub static ref RAINBOW: Palette = Palette::from_table(hashmap! {
        "red" => (255, 0, 0),
        "orange" => (255, 165, 0),
        "yellow" => (255, 255, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "indigo" => (75, 0, 130),
        "violet" => (238, 130, 238),
    });

    /// All 147 color keywords from the CSS3 specification, `aliceblue` through `yellowgreen`,
    /// including the gray/grey spelling pairs.
    pub static ref W3C: Palette = Palette::from_csv(include_str!("../w3c-colors.csv"));
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_palette_sizes() {
        assert_eq!(PRIMARY.len(), 5);
        assert_eq!(RAINBOW.len(), 7);
        assert_eq!(W3C.len(), 147);
        assert!(!PRIMARY.is_empty());
    }

    #[test]
    fn test_primary_contents() {
        let black = RGBColor::new(0, 0, 0).unwrap();
        let white = RGBColor::new(255, 255, 255).unwrap();
        let red = RGBColor::new(255, 0, 0).unwrap();
        let green = RGBColor::new(0, 255, 0).unwrap();
        let blue = RGBColor::new(0, 0, 255).unwrap();
        assert_eq!(PRIMARY.get("black"), Some(&black));
        assert_eq!(PRIMARY.get("white"), Some(&white));
        assert_eq!(PRIMARY.get("red"), Some(&red));
        assert_eq!(PRIMARY.get("green"), Some(&green));
        assert_eq!(PRIMARY.get("blue"), Some(&blue));
    }

    #[test]
    fn test_rainbow_contents() {
        let expected = [
            ("red", (255, 0, 0)),
            ("orange", (255, 165, 0)),
            ("yellow", (255, 255, 0)),
            ("green", (0, 128, 0)),
            ("blue", (0, 0, 255)),
            ("indigo", (75, 0, 130)),
            ("violet", (238, 130, 238)),
        ];
        for &(name, channels) in &expected {
            let color = RGBColor::from(channels);
            assert_eq!(RAINBOW.get(name), Some(&color), "wrong color for {}", name);
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(PRIMARY.get("GREEN"), PRIMARY.get("green"));
        assert_eq!(W3C.get("AliceBlue"), W3C.get("aliceblue"));
        assert!(PRIMARY.get("GREEN").is_some());
    }

    #[test]
    fn test_unknown_names_are_none() {
        assert_eq!(PRIMARY.get("chartreuse"), None);
        assert_eq!(RAINBOW.get("black"), None);
        // a CSS4 addition, deliberately absent from the CSS3 table
        assert_eq!(W3C.get("rebeccapurple"), None);
    }

    #[test]
    fn test_lookups_share_one_instance() {
        let first = PRIMARY.get("red").unwrap();
        let second = PRIMARY.get("red").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_same_name_differs_between_palettes() {
        // rainbow green is the dimmer CSS green, not the primary green
        assert_ne!(RAINBOW.get("green").unwrap(), PRIMARY.get("green").unwrap());
        // while red happens to agree in value, the instances are separate
        assert_eq!(RAINBOW.get("red").unwrap(), PRIMARY.get("red").unwrap());
        assert!(!std::ptr::eq(
            RAINBOW.get("red").unwrap(),
            PRIMARY.get("red").unwrap()
        ));
    }

    #[test]
    fn test_names_cover_the_palette() {
        let mut names = PRIMARY.names();
        names.sort_unstable();
        assert_eq!(names, vec!["black", "blue", "green", "red", "white"]);
        for name in W3C.names() {
            assert!(W3C.get(name).is_some(), "name {} didn't resolve", name);
        }
    }

    #[test]
    fn test_w3c_spot_checks() {
        let aliceblue = RGBColor::new(240, 248, 255).unwrap();
        let yellowgreen = RGBColor::new(154, 205, 50).unwrap();
        let gray = RGBColor::new(128, 128, 128).unwrap();
        assert_eq!(W3C.get("aliceblue"), Some(&aliceblue));
        assert_eq!(W3C.get("yellowgreen"), Some(&yellowgreen));
        // both spellings, one color
        assert_eq!(W3C.get("gray"), Some(&gray));
        assert_eq!(W3C.get("grey"), Some(&gray));
    }
}
