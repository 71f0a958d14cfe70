pub mod config;
pub mod credits;
pub mod request;

pub use config::{ApiConfig, AppConfig, OutputConfig, PreviewConfig};
pub use credits::PaletteWithCredits;
pub use request::{GenerateOptions, GenerateRequest, OutlineMode, PaletteInput, ShaderNames};
