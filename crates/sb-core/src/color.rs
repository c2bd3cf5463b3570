//! CSS color recognition for painting and lint.
//!
//! Shape colors travel through the engine as raw strings. They are parsed
//! only where a concrete RGBA value is needed (the Vello painter) or where
//! the host asks whether a string is a color at all (lint). Parsing goes
//! through the `color` crate, the same CSS Color 4 parser `peniko` re-exports.

use ::color::{AlphaColor, Srgb, parse_color};

/// Parse a CSS color string into sRGB with alpha.
///
/// Accepts whatever a browser accepts as a fill: hex, the full named-color
/// table, `transparent`, and the functional forms (`rgb()`, `hsl()`,
/// `hwb()`, `lab()`, `oklch()`, `color()`) in comma or space syntax.
pub fn parse_css_color(s: &str) -> Option<AlphaColor<Srgb>> {
    match parse_color(s) {
        Ok(c) => Some(c.to_alpha_color::<Srgb>()),
        Err(e) => {
            log::trace!("color {s:?} rejected: {e}");
            None
        }
    }
}

/// Whether a browser would render this string as a color.
pub fn is_css_color(s: &str) -> bool {
    parse_css_color(s).is_some()
}
