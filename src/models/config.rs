use crate::error::ConfigError;
use crate::models::ShaderNames;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Remote palette API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Generated shader source settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Swatch preview layout
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Remote palette API settings
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the palette-sharing site
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://lospec.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Generated shader source settings
#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// GLSL identifiers used in the generated code
    #[serde(flatten)]
    pub names: ShaderNames,

    /// Template file replacing the embedded one
    #[serde(default)]
    pub template: Option<PathBuf>,
}

/// Swatch preview layout
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Tile edge length in pixels
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Tiles per row
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Gap between tiles in pixels
    #[serde(default = "default_gap")]
    pub gap: u32,
}

fn default_tile_size() -> u32 {
    32
}

fn default_columns() -> u32 {
    8
}

fn default_gap() -> u32 {
    2
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
            columns: default_columns(),
            gap: default_gap(),
        }
    }
}

impl AppConfig {
    /// Load configuration, falling back to defaults on any problem.
    ///
    /// With no path the defaults are used silently.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a YAML file, reporting failures.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;

        tracing::info!(
            path = %path.display(),
            base_url = %config.api.base_url,
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Parse configuration from YAML text. An empty document yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
