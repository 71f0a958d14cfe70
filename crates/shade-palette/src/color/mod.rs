//! Color types and hex conversion
//!
//! Two representations of the same RGB color:
//!
//! - **ByteColor**: 8-bit channels. Used for parsing, display and distance.
//! - **NormalizedColor**: channels scaled to 0.0..=1.0. Used for shader output.
//!
//! # Example
//!
//! ```
//! use shade_palette::{format_vec3, parse_byte_color, NormalizedColor};
//!
//! let byte = parse_byte_color("#ff8000").unwrap();
//! let normalized = NormalizedColor::from(byte);
//! assert_eq!(format_vec3(normalized), "vec3(1.0000000, 0.5019608, 0.0000000)");
//! ```

mod byte;
mod normalized;

pub use byte::{parse_byte_color, ByteColor};
pub use normalized::{format_vec3, parse_normalized_color, NormalizedColor, VEC3_PRECISION};
