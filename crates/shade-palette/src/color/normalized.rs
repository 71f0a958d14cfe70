//! Normalized color type and shader literal formatting

use std::str::FromStr;

use super::byte::{parse_byte_color, ByteColor};
use crate::palette::ParseColorError;

/// Digits after the decimal point in generated `vec3` literals.
pub const VEC3_PRECISION: usize = 7;

/// A color with each channel scaled to 0.0..=1.0.
///
/// Always derived from a [`ByteColor`] by dividing each channel by 255, so
/// `normalized.r == byte.r as f64 / 255.0` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedColor {
    /// Red channel (0.0..=1.0)
    pub r: f64,
    /// Green channel (0.0..=1.0)
    pub g: f64,
    /// Blue channel (0.0..=1.0)
    pub b: f64,
}

impl NormalizedColor {
    /// Create a normalized color from raw channel values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<ByteColor> for NormalizedColor {
    #[inline]
    fn from(color: ByteColor) -> Self {
        Self {
            r: color.r as f64 / 255.0,
            g: color.g as f64 / 255.0,
            b: color.b as f64 / 255.0,
        }
    }
}

/// Parse a hex color straight to normalized form.
///
/// Same accepted syntax and errors as [`parse_byte_color`].
///
/// # Example
/// ```
/// use shade_palette::parse_normalized_color;
/// let c = parse_normalized_color("#ff0080").unwrap();
/// assert_eq!(c.r, 1.0);
/// assert_eq!(c.b, 128.0 / 255.0);
/// ```
pub fn parse_normalized_color(hex: &str) -> Result<NormalizedColor, ParseColorError> {
    parse_byte_color(hex).map(NormalizedColor::from)
}

impl FromStr for NormalizedColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_normalized_color(s)
    }
}

/// Format a color as a GLSL `vec3(R, G, B)` literal.
///
/// Each channel is printed with exactly seven decimal places.
///
/// # Example
/// ```
/// use shade_palette::{format_vec3, NormalizedColor};
/// let s = format_vec3(NormalizedColor::new(1.0, 0.0, 0.5));
/// assert_eq!(s, "vec3(1.0000000, 0.0000000, 0.5000000)");
/// ```
pub fn format_vec3(color: NormalizedColor) -> String {
    format!(
        "vec3({:.p$}, {:.p$}, {:.p$})",
        color.r,
        color.g,
        color.b,
        p = VEC3_PRECISION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_exact_division() {
        for v in 0..=255u8 {
            let n = NormalizedColor::from(ByteColor::new(v, v, v));
            assert_eq!(n.r, v as f64 / 255.0);
            assert!((0.0..=1.0).contains(&n.g));
        }
    }

    #[test]
    fn test_parse_normalized() {
        let white: NormalizedColor = "#fff".parse().unwrap();
        assert_eq!(white, NormalizedColor::new(1.0, 1.0, 1.0));

        assert_eq!(
            parse_normalized_color("12345"),
            Err(ParseColorError::InvalidLength(5))
        );
    }

    #[test]
    fn test_format_vec3() {
        assert_eq!(
            format_vec3(NormalizedColor::new(1.0, 0.0, 0.5)),
            "vec3(1.0000000, 0.0000000, 0.5000000)"
        );
        // 128 / 255 = 0.50196078...
        let grey = parse_normalized_color("808080").unwrap();
        assert_eq!(
            format_vec3(grey),
            "vec3(0.5019608, 0.5019608, 0.5019608)"
        );
        // 1 / 255 = 0.00392156...
        let dark = parse_normalized_color("010203").unwrap();
        assert_eq!(
            format_vec3(dark),
            "vec3(0.0039216, 0.0078431, 0.0117647)"
        );
    }
}
