//! This module implements the low-level conversion math between RGB and HSV. Both conversions work
//! on unit-interval channels: an RGB triple here is three numbers that range between 0 and 1, not
//! the 0-255 values that [`RGBColor`](../color/struct.RGBColor.html) stores, and an HSV triple is
//! hue, saturation, and value, also between 0 and 1, with hue measured as a fraction of a full turn
//! instead of degrees.
//! The color types scale in and out of this range themselves, so most users never call these
//! functions directly, but they're public because the bare math is occasionally handy (feeding a
//! shader, say, or checking a conversion by hand).
//!
//! The algorithms are the classic hexcone ones: each hue sextant is a linear ramp between the
//! largest and smallest channels. They are exact inverses of each other up to floating-point
//! rounding, which is the best any RGB-HSV pair can do.

/// Converts an RGB triple, each channel in the range [0, 1], to the equivalent HSV triple, each
/// channel in the range [0, 1]. Achromatic inputs (all three channels equal) have no meaningful hue
/// and report hue and saturation both exactly 0.
///
/// # Example
///
/// ```
/// # use cerise::colorsys::rgb_to_hsv;
/// let (h, s, v) = rgb_to_hsv(0.2, 0.4, 0.4);
/// assert_eq!((h, s, v), (0.5, 0.5, 0.4));
/// ```
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let value = max;
    if max == min {
        return (0.0, 0.0, value);
    }
    let saturation = (max - min) / max;
    let rc = (max - r) / (max - min);
    let gc = (max - g) / (max - min);
    let bc = (max - b) / (max - min);
    let hue = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    // the sextant offset above can leave hue in (-1, 5]: fold it into [0, 1) as a turn fraction
    ((hue / 6.0).rem_euclid(1.0), saturation, value)
}

/// Converts an HSV triple to the equivalent RGB triple, each channel in the range [0, 1]. Hue is
/// taken modulo a full turn, so any real hue works, including negative ones; saturation and value
/// outside the range [0, 1] produce garbage, which is why
/// [`HSVColor`](../colors/hsvcolor/struct.HSVColor.html) refuses to hold them.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 => (v, p, q),
        // rem_euclid(6) only returns 0 through 5
        _ => unreachable!(),
    }
}
