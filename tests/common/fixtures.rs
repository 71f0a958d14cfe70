//! Test fixtures and constants.

use serde_json::json;

/// Palette text used across tests
pub mod palettes {
    /// Black, white, red
    pub const BASIC: &str = "#000000\n#ffffff\n#ff0000\n";

    /// Mixed separators and shorthand
    pub const MIXED: &str = "#1a1c2c, 5d275d\n#b13e53 ef7d57\n\nfff\n";
}

/// Expected GLSL for [`palettes::BASIC`] without outlines
pub const BASIC_GLSL: &str = "const int colorNum = 3;
vec3 colors[colorNum] = vec3[](
 vec3(0.0000000, 0.0000000, 0.0000000),
 vec3(1.0000000, 1.0000000, 1.0000000),
 vec3(1.0000000, 0.0000000, 0.0000000)
);";

/// API response for a small credited palette
pub fn credited_palette() -> serde_json::Value {
    json!({
        "name": "Sweetie 4",
        "author": "GrafxKid",
        "colors": ["1a1c2c", "5d275d", "b13e53", "f4f4f4"]
    })
}
