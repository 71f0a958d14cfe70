use regex::Regex;
use serde::Deserialize;
use shade_palette::ByteColor;
use std::sync::OnceLock;

use super::PaletteWithCredits;

/// GLSL identifiers used in generated source
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ShaderNames {
    /// `const int` holding the color count
    pub count: String,
    /// The `vec3` array
    pub array: String,
    /// `const vec3` for the dark outline
    pub dark_outline: String,
    /// `const vec3` for the light outline
    pub light_outline: String,
}

impl Default for ShaderNames {
    fn default() -> Self {
        Self {
            count: "colorNum".to_string(),
            array: "colors".to_string(),
            dark_outline: "darkOutline".to_string(),
            light_outline: "lightOutline".to_string(),
        }
    }
}

fn identifier_regex() -> &'static Regex {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid")
    })
}

/// GLSL keywords and built-in type names that cannot be declared
const GLSL_RESERVED: &[&str] = &[
    "attribute", "bool", "break", "bvec2", "bvec3", "bvec4", "case", "centroid", "const",
    "continue", "default", "discard", "do", "else", "false", "flat", "float", "for", "highp",
    "if", "in", "inout", "int", "invariant", "ivec2", "ivec3", "ivec4", "layout", "lowp",
    "mat2", "mat3", "mat4", "mediump", "out", "precision", "return", "sampler2D",
    "sampler3D", "samplerCube", "smooth", "struct", "switch", "true", "uint", "uniform",
    "uvec2", "uvec3", "uvec4", "varying", "vec2", "vec3", "vec4", "void", "while",
];

impl ShaderNames {
    /// First name that is not a usable GLSL identifier, if any.
    ///
    /// Names must match `[A-Za-z_][A-Za-z0-9_]*`, must not use the
    /// reserved `gl_` prefix or a GLSL keyword, and must be distinct. For a
    /// repeated name the second occurrence is reported.
    pub fn first_invalid(&self) -> Option<&str> {
        let names = [
            self.count.as_str(),
            self.array.as_str(),
            self.dark_outline.as_str(),
            self.light_outline.as_str(),
        ];

        names.iter().enumerate().find_map(|(i, &name)| {
            let bad = !identifier_regex().is_match(name)
                || name.starts_with("gl_")
                || GLSL_RESERVED.contains(&name)
                || names[..i].contains(&name);
            bad.then_some(name)
        })
    }
}

/// How outline colors are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineMode {
    /// No outline constants are emitted
    #[default]
    None,
    /// Palette entries closest to black (dark) and white (light)
    Auto,
    /// Caller-supplied colors
    Custom { dark: ByteColor, light: ByteColor },
}

impl OutlineMode {
    /// Same custom color in both outline slots
    pub fn uniform(color: ByteColor) -> Self {
        OutlineMode::Custom {
            dark: color,
            light: color,
        }
    }
}

/// Options that shape the generated source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub outline: OutlineMode,
    pub names: ShaderNames,
}

/// Where the palette for a request comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteInput {
    /// Raw hex list typed or piped in by the user
    Text(String),
    /// Already parsed palette, e.g. from a remote fetch
    Parsed(PaletteWithCredits),
}

/// One generation request: current input state in, shader source out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub input: PaletteInput,
    pub options: GenerateOptions,
}

impl GenerateRequest {
    pub fn from_text(text: impl Into<String>, options: GenerateOptions) -> Self {
        Self {
            input: PaletteInput::Text(text.into()),
            options,
        }
    }

    pub fn from_palette(palette: PaletteWithCredits, options: GenerateOptions) -> Self {
        Self {
            input: PaletteInput::Parsed(palette),
            options,
        }
    }
}
