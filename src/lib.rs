//! Hexshade - hex palettes to GLSL
//!
//! Converts hex color lists into shader color arrays, fetches named
//! palettes from a palette-sharing API, and renders swatch previews.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
