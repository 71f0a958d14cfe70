pub mod swatch;

pub use swatch::{render_swatch_pixmap, render_swatch_png, SwatchGeometry, SwatchOutlines};
