//! Ordered palette with nearest-color matching.
//!
//! A [`Palette`] keeps colors in input order (order decides the shader
//! array layout) and allows duplicates. The matcher picks the entry closest
//! to a target by Euclidean distance in byte RGB space.

use super::error::PaletteError;
use crate::color::{parse_byte_color, ByteColor, NormalizedColor};

/// Which extreme an outline color should sit closest to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineKind {
    /// Closest entry to pure black
    Dark,
    /// Closest entry to pure white
    Light,
}

impl OutlineKind {
    /// Reference color the outline is matched against.
    #[inline]
    pub fn reference(self) -> ByteColor {
        match self {
            OutlineKind::Dark => ByteColor::BLACK,
            OutlineKind::Light => ByteColor::WHITE,
        }
    }
}

/// Find the index of the color closest to `target`.
///
/// Scans in order and keeps the first entry with the strictly smallest
/// distance, so ties resolve to the earliest index.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPalette`] if `colors` is empty. No
/// distances are computed in that case.
///
/// # Example
///
/// ```
/// use shade_palette::{closest_index, ByteColor};
///
/// let colors = [ByteColor::BLACK, ByteColor::WHITE, ByteColor::new(255, 0, 0)];
/// assert_eq!(closest_index(&colors, ByteColor::BLACK).unwrap(), 0);
/// assert_eq!(closest_index(&colors, ByteColor::WHITE).unwrap(), 1);
/// assert!(closest_index(&[], ByteColor::BLACK).is_err());
/// ```
pub fn closest_index(colors: &[ByteColor], target: ByteColor) -> Result<usize, PaletteError> {
    let (first, rest) = colors.split_first().ok_or(PaletteError::EmptyPalette)?;

    // Squared integer distance orders the same as sqrt and has no float ties
    let mut best_idx = 0;
    let mut best_dist = first.distance_squared(target);

    for (i, color) in rest.iter().enumerate() {
        let dist = color.distance_squared(target);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i + 1;
        }
    }

    Ok(best_idx)
}

/// An ordered, non-empty sequence of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<ByteColor>,
}

impl Palette {
    /// Create a palette from byte colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<ByteColor>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Create a palette from hex strings like `"#FF0000"`, `"f00"` or `"ff0000"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for the first invalid entry, or
    /// [`PaletteError::EmptyPalette`] if `entries` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use shade_palette::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000", "ffffff"]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self, PaletteError> {
        let colors = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let entry = entry.as_ref();
                parse_byte_color(entry).map_err(|source| PaletteError::ParseColor {
                    index,
                    entry: entry.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(colors)
    }

    /// Parse a palette from free text.
    ///
    /// Entries may be separated by newlines, commas or whitespace. Blank
    /// entries are skipped, so trailing newlines are harmless. Reported
    /// indices count only non-blank entries.
    ///
    /// # Example
    ///
    /// ```
    /// use shade_palette::{ByteColor, Palette};
    ///
    /// let palette = Palette::parse_list("#000000\n#ffffff\n#ff0000\n").unwrap();
    /// assert_eq!(palette.get(2), Some(ByteColor::new(255, 0, 0)));
    /// ```
    pub fn parse_list(text: &str) -> Result<Self, PaletteError> {
        let entries: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|entry| !entry.is_empty())
            .collect();

        Self::from_hex(entries.as_slice())
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `idx`, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<ByteColor> {
        self.colors.get(idx).copied()
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[ByteColor] {
        &self.colors
    }

    /// Iterate colors in palette order.
    pub fn iter(&self) -> impl Iterator<Item = ByteColor> + '_ {
        self.colors.iter().copied()
    }

    /// Normalized form of every entry, in palette order.
    pub fn normalized(&self) -> Vec<NormalizedColor> {
        self.iter().map(NormalizedColor::from).collect()
    }

    /// Index of the entry closest to `target`.
    ///
    /// Ties resolve to the earliest index.
    pub fn closest_index(&self, target: ByteColor) -> usize {
        // Construction guarantees at least one entry
        closest_index(&self.colors, target).unwrap_or(0)
    }

    /// Pick an outline color: the entry closest to black or white.
    ///
    /// Returns the index and the chosen color.
    ///
    /// # Example
    ///
    /// ```
    /// use shade_palette::{ByteColor, OutlineKind, Palette};
    ///
    /// let palette = Palette::from_hex(&["#202020", "#e0e0e0", "#ff0000"]).unwrap();
    /// assert_eq!(palette.outline(OutlineKind::Dark), (0, ByteColor::new(0x20, 0x20, 0x20)));
    /// assert_eq!(palette.outline(OutlineKind::Light).0, 1);
    /// ```
    pub fn outline(&self, kind: OutlineKind) -> (usize, ByteColor) {
        let idx = self.closest_index(kind.reference());
        (idx, self.colors[idx])
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ByteColor;
    type IntoIter = std::slice::Iter<'a, ByteColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
