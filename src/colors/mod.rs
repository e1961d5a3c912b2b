//! This module contains the color representations other than RGB. For convenience, each type is
//! imported into this module's namespace directly.
pub mod hexcolor;
pub mod hsvcolor;

// for convenience, use this namespace for the color objects
pub use self::hexcolor::{HexChannel, HexColor};
pub use self::hsvcolor::HSVColor;
