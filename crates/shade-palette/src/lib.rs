#![allow(clippy::module_inception)]

//! shade-palette: hex palettes for shader source
//!
//! This library parses hex color text into byte and normalized RGB,
//! formats GLSL `vec3` literals, and finds the palette entry closest to a
//! target color.
//!
//! # Quick Start
//!
//! ```
//! use shade_palette::{format_vec3, OutlineKind, Palette};
//!
//! let palette = Palette::parse_list("#000000\n#ffffff\n#ff0000").unwrap();
//!
//! let (dark, _) = palette.outline(OutlineKind::Dark);
//! let (light, _) = palette.outline(OutlineKind::Light);
//! assert_eq!((dark, light), (0, 1));
//!
//! let lines: Vec<String> = palette.normalized().into_iter().map(format_vec3).collect();
//! assert_eq!(lines[2], "vec3(1.0000000, 0.0000000, 0.0000000)");
//! ```
//!
//! # Hex Syntax
//!
//! A color is 3 or 6 hex digits with an optional leading `#`, in any case.
//! The 3-digit form doubles each digit (`f0a` is `ff00aa`). Anything else
//! is rejected with [`ParseColorError`]; malformed input never turns into
//! a default color.
//!
//! # Distance
//!
//! Matching uses plain Euclidean distance over the 0..=255 channels:
//!
//! ```text
//! d = sqrt((r1 - r2)^2 + (g1 - g2)^2 + (b1 - b2)^2)
//! ```
//!
//! The scan keeps the first strictly smaller distance, so on ties the
//! earliest palette entry wins. See [`closest_index`].

pub mod color;
pub mod palette;


pub use color::{
    format_vec3, parse_byte_color, parse_normalized_color, ByteColor, NormalizedColor,
    VEC3_PRECISION,
};
pub use palette::{closest_index, OutlineKind, Palette, PaletteError, ParseColorError};
