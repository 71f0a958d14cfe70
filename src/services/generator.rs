use serde::Serialize;
use shade_palette::{ByteColor, NormalizedColor, OutlineKind, Palette, PaletteError};

use crate::models::{
    GenerateOptions, GenerateRequest, OutlineMode, PaletteInput, PaletteWithCredits, ShaderNames,
};
use crate::services::{TemplateError, TemplateService};

/// Error from shader generation
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Invalid GLSL identifier: {0:?}")]
    InvalidIdentifier(String),
}

/// An outline color and, when picked automatically, its palette index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOutline {
    pub color: ByteColor,
    pub index: Option<usize>,
}

impl ResolvedOutline {
    fn from_palette(palette: &Palette, kind: OutlineKind) -> Self {
        let (index, color) = palette.outline(kind);
        Self {
            color,
            index: Some(index),
        }
    }

    fn custom(color: ByteColor) -> Self {
        Self { color, index: None }
    }
}

/// Result of one generation request
#[derive(Debug, Clone)]
pub struct GeneratedShader {
    /// Rendered shader source
    pub source: String,
    /// The palette the source was built from
    pub palette: PaletteWithCredits,
    pub dark_outline: Option<ResolvedOutline>,
    pub light_outline: Option<ResolvedOutline>,
}

impl GeneratedShader {
    /// Palette colors in normalized form, in output order
    pub fn colors(&self) -> Vec<NormalizedColor> {
        self.palette.palette.normalized()
    }
}

/// Data handed to the template
#[derive(Serialize)]
struct ShaderContext<'a> {
    attribution: Option<String>,
    count: usize,
    names: NamesContext<'a>,
    colors: Vec<[f64; 3]>,
    dark_outline: Option<[f64; 3]>,
    light_outline: Option<[f64; 3]>,
}

#[derive(Serialize)]
struct NamesContext<'a> {
    count: &'a str,
    array: &'a str,
    dark_outline: &'a str,
    light_outline: &'a str,
}

impl<'a> From<&'a ShaderNames> for NamesContext<'a> {
    fn from(names: &'a ShaderNames) -> Self {
        Self {
            count: &names.count,
            array: &names.array,
            dark_outline: &names.dark_outline,
            light_outline: &names.light_outline,
        }
    }
}

/// Pick outline colors for a palette according to `mode`
pub fn resolve_outlines(
    palette: &Palette,
    mode: OutlineMode,
) -> (Option<ResolvedOutline>, Option<ResolvedOutline>) {
    match mode {
        OutlineMode::None => (None, None),
        OutlineMode::Auto => (
            Some(ResolvedOutline::from_palette(palette, OutlineKind::Dark)),
            Some(ResolvedOutline::from_palette(palette, OutlineKind::Light)),
        ),
        OutlineMode::Custom { dark, light } => (
            Some(ResolvedOutline::custom(dark)),
            Some(ResolvedOutline::custom(light)),
        ),
    }
}

fn channels(color: ByteColor) -> [f64; 3] {
    NormalizedColor::from(color).to_array()
}

/// Run one generation request: parse, resolve outlines, render.
///
/// Holds no state between calls; everything needed travels in `request`.
pub fn generate(
    request: GenerateRequest,
    templates: &TemplateService,
) -> Result<GeneratedShader, GenerateError> {
    let GenerateRequest { input, options } = request;
    let GenerateOptions { outline, names } = options;

    if let Some(name) = names.first_invalid() {
        return Err(GenerateError::InvalidIdentifier(name.to_string()));
    }

    let palette = match input {
        PaletteInput::Text(text) => PaletteWithCredits::new(Palette::parse_list(&text)?),
        PaletteInput::Parsed(palette) => palette,
    };

    let (dark_outline, light_outline) = resolve_outlines(&palette.palette, outline);

    let context = ShaderContext {
        attribution: palette.attribution(),
        count: palette.palette.len(),
        names: NamesContext::from(&names),
        colors: palette.palette.iter().map(channels).collect(),
        dark_outline: dark_outline.map(|o| channels(o.color)),
        light_outline: light_outline.map(|o| channels(o.color)),
    };

    let source = templates.render(&context)?;

    tracing::debug!(
        colors = palette.palette.len(),
        dark_outline = ?dark_outline.map(|o| o.color.to_string()),
        light_outline = ?light_outline.map(|o| o.color.to_string()),
        "Generated shader source"
    );

    Ok(GeneratedShader {
        source,
        palette,
        dark_outline,
        light_outline,
    })
}
