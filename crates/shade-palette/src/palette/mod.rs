//! Palette types and nearest-color matching
//!
//! This module provides the ordered [`Palette`] collection, the
//! [`closest_index`] search, and their error types.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{closest_index, OutlineKind, Palette};
