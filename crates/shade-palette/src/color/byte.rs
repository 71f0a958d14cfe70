//! Byte-form color type
//!
//! A color stored as three 8-bit channels. This is the form used for
//! distance calculations and for the hex text round trip.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color with 8-bit red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteColor {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl ByteColor {
    /// Pure black, the reference for dark outlines.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white, the reference for light outlines.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a 24-bit `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    ///
    /// # Example
    /// ```
    /// use shade_palette::ByteColor;
    /// assert_eq!(ByteColor::from_u24(0xff00aa), ByteColor::new(255, 0, 170));
    /// ```
    #[inline]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Pack the color into a 24-bit `0xRRGGBB` value.
    #[inline]
    pub const fn to_u24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Channels as an `[r, g, b]` array.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Euclidean distance to `other` in byte RGB space.
    ///
    /// # Example
    /// ```
    /// use shade_palette::ByteColor;
    /// let d = ByteColor::new(3, 4, 0).distance(ByteColor::BLACK);
    /// assert_eq!(d, 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: ByteColor) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Squared Euclidean distance, exact in integer arithmetic.
    #[inline]
    pub fn distance_squared(self, other: ByteColor) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 3]> for ByteColor {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<(u8, u8, u8)> for ByteColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for ByteColor {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a hex color into byte form.
///
/// Accepts `RGB` or `RRGGBB` digits, case-insensitive, with an optional
/// leading `#`. Surrounding whitespace is ignored. Shorthand digits are
/// doubled, so `f0a` reads as `ff00aa`.
///
/// # Errors
///
/// - [`ParseColorError::InvalidHex`] for the first non-hex character
/// - [`ParseColorError::InvalidLength`] when the digit count is not 3 or 6
///
/// # Example
/// ```
/// use shade_palette::{parse_byte_color, ByteColor};
/// assert_eq!(parse_byte_color("#f0a").unwrap(), ByteColor::new(255, 0, 170));
/// assert!(parse_byte_color("zzz").is_err());
/// ```
pub fn parse_byte_color(hex: &str) -> Result<ByteColor, ParseColorError> {
    let s = hex.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    let digits = s
        .chars()
        .map(|c| c.to_digit(16).ok_or(ParseColorError::InvalidHex(c)))
        .collect::<Result<Vec<u32>, _>>()?;

    let value = match digits.len() {
        // Shorthand: each digit d doubles to dd, which is d * 17
        3 => digits.iter().fold(0u32, |acc, &d| (acc << 8) | (d * 17)),
        6 => digits.iter().fold(0u32, |acc, &d| (acc << 4) | d),
        n => return Err(ParseColorError::InvalidLength(n)),
    };

    Ok(ByteColor::from_u24(value))
}

impl FromStr for ByteColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_byte_color(s)
    }
}
