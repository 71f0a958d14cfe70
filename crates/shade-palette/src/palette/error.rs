//! Error types for palette operations
//!
//! This module provides error types for hex color parsing and palette
//! construction.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when a hex color is malformed, either because the digit count
/// is wrong or because a character is not hexadecimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength(usize),
    /// Invalid hexadecimal character encountered
    InvalidHex(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(
                    f,
                    "invalid hex color length {} (expected 3 or 6 digits)",
                    len
                )
            }
            ParseColorError::InvalidHex(ch) => {
                write!(f, "invalid hex character {:?}", ch)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette construction and matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided
    EmptyPalette,
    /// Entry at `index` is not a valid hex color
    ParseColor {
        /// Zero-based position of the offending entry
        index: usize,
        /// The raw entry text
        entry: String,
        /// Underlying parse failure
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::ParseColor {
                index,
                entry,
                source,
            } => {
                write!(f, "invalid color {:?} at index {}: {}", entry, index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { source, .. } => Some(source),
            _ => None,
        }
    }
}
