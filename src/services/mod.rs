pub mod generator;
pub mod palette_source;
pub mod template_service;

pub use generator::{generate, resolve_outlines, GenerateError, GeneratedShader, ResolvedOutline};
pub use palette_source::{
    parse_palette_response, slugify, LospecClient, PaletteSource, SourceError,
};
pub use template_service::{TemplateError, TemplateService};
