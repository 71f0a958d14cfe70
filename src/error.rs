use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid swatch layout: {0}")]
    InvalidLayout(String),

    #[error("Image too large: {width}x{height}")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
