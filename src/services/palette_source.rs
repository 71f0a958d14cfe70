//! Remote palette fetching
//!
//! Palettes are fetched from a Lospec-compatible API:
//! `GET {base_url}/palette-list/{slug}.json` returning
//! `{ "name": "...", "author": "...", "colors": ["rrggbb", ...] }`.
//!
//! There is exactly one attempt per fetch. Failures are reported as a
//! single error, never as a partial palette.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::Deserialize;
use shade_palette::{Palette, PaletteError};
use std::sync::OnceLock;
use std::time::Duration;

use crate::models::{ApiConfig, PaletteWithCredits};

/// Error from a remote palette fetch
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Remote palette unavailable: invalid palette name {0:?}")]
    InvalidSlug(String),

    #[error("Remote palette unavailable: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote palette unavailable: server returned {status} for {slug:?}")]
    Status { status: u16, slug: String },

    #[error("Remote palette unavailable: malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Remote palette unavailable: {0}")]
    Palette(#[from] PaletteError),
}

/// Anything that can look up a palette by name
pub trait PaletteSource {
    fn fetch(&self, slug: &str) -> Result<PaletteWithCredits, SourceError>;
}

/// Wire format of the palette API
#[derive(Debug, Deserialize)]
struct PaletteResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    author: Option<String>,
    colors: Vec<String>,
}

impl PaletteResponse {
    fn into_palette(self) -> Result<PaletteWithCredits, SourceError> {
        let palette = Palette::from_hex(self.colors.as_slice())?;
        Ok(PaletteWithCredits {
            palette,
            name: self.name,
            author: self.author,
        })
    }
}

/// Parse an API response body into a palette with credits
pub fn parse_palette_response(body: &str) -> Result<PaletteWithCredits, SourceError> {
    let response: PaletteResponse = serde_json::from_str(body)?;
    response.into_palette()
}

/// Characters escaped in the slug path segment (RFC 3986 unreserved are kept)
const SLUG_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn slug_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("slug regex is valid"))
}

/// Turn a display name like "Endesga 32" into a URL slug like "endesga-32"
pub fn slugify(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    slug_separator()
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Blocking client for the Lospec palette API
pub struct LospecClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl LospecClient {
    /// Build a client from API settings
    pub fn new(config: &ApiConfig) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("hexshade/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL for a palette slug
    pub fn palette_url(&self, slug: &str) -> String {
        format!(
            "{}/palette-list/{}.json",
            self.base_url,
            utf8_percent_encode(slug, SLUG_ESCAPE)
        )
    }
}

impl PaletteSource for LospecClient {
    fn fetch(&self, name: &str) -> Result<PaletteWithCredits, SourceError> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(SourceError::InvalidSlug(name.to_string()));
        }

        let url = self.palette_url(&slug);
        tracing::debug!(url = %url, "Fetching palette");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), slug = %slug, "Palette fetch failed");
            return Err(SourceError::Status {
                status: status.as_u16(),
                slug,
            });
        }

        let body = response.text()?;
        let palette = parse_palette_response(&body)?;

        tracing::info!(
            slug = %slug,
            colors = palette.palette.len(),
            name = ?palette.name,
            "Fetched palette"
        );

        Ok(palette)
    }
}
