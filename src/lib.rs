//! Cerise is a library for making everyday color work simple: reading and writing the hex codes
//! designers hand you, hopping between RGB and HSV, blending colors the way image editors do, and
//! pulling sensible colors out of thin air when you need a dozen chart series told apart. The
//! underlying philosophy is that a color is a color: whether it arrived as a hex string, an RGB
//! triple, or an HSV pick shouldn't change what you can do with it, so every operation here accepts
//! any representation and the representations all agree on what equal means.
//!
//! # Example
//!
//! ```
//! use cerise::prelude::*;
//!
//! // every representation converts to every other
//! let brick: HexColor = "b22222".parse().unwrap();
//! assert_eq!(brick.rgb(), RGBColor::new(178, 34, 34).unwrap());
//!
//! // arithmetic works across representations and always lands in RGB
//! let sky = RGBColor::new(135, 206, 235).unwrap();
//! assert_eq!(brick.screen(&sky).hex().code(), "dad4ed");
//!
//! // named palettes round things out
//! let tomato = W3C.get("tomato").unwrap();
//! let lighter = *tomato + RGBColor::new(20, 20, 20).unwrap();
//! assert_eq!(lighter, RGBColor::new(255, 119, 91).unwrap());
//! ```

#![doc(html_root_url = "https://docs.rs/cerise/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but the exact conversion constants in the tests are what they
// are, and separators wouldn't make 0.39215686274509803 any friendlier
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod color;
pub mod colors;
pub mod colorsys;
pub mod palette;
pub mod prelude;
pub mod random;
pub mod wheel;
