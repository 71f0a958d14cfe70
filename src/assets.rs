//! Template loading with an embedded fallback
//!
//! - If no template file is configured: use the embedded default template
//! - If a template file is configured: read it from disk (missing file is an error)
//!
//! `init` extracts the embedded templates so users have a starting point
//! for their own.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded shader templates
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.glsl"]
struct EmbeddedTemplates;

/// Name of the embedded template used when none is configured
pub const DEFAULT_TEMPLATE: &str = "palette.glsl";

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Template loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External template file (from config or `--template`)
    template_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `template_file` should be `Some` only when the user asked for a
    /// custom template.
    pub fn new(template_file: Option<PathBuf>) -> Self {
        Self { template_file }
    }

    /// Path of the external template, if configured
    pub fn template_file(&self) -> Option<&Path> {
        self.template_file.as_deref()
    }

    /// Name used to register the active template
    pub fn template_name(&self) -> String {
        self.template_file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string())
    }

    /// Read the active template as a UTF-8 string
    pub fn read_template_string(&self) -> io::Result<String> {
        let bytes = match self.template_file {
            Some(ref path) => {
                tracing::trace!(path = %path.display(), "Loading template from filesystem");
                Cow::Owned(fs::read(path)?)
            }
            None => Self::read_embedded(DEFAULT_TEMPLATE)?,
        };

        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn read_embedded(name: &str) -> io::Result<Cow<'static, [u8]>> {
        EmbeddedTemplates::get(name)
            .map(|f| {
                tracing::trace!(template = %name, "Loading template from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Template not found: {name}"),
                )
            })
    }

    /// List embedded template names
    pub fn list_embedded() -> Vec<String> {
        let mut names: Vec<String> = EmbeddedTemplates::iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }

    /// Extract embedded templates into `dir`
    ///
    /// Existing files are skipped unless `force` is set.
    pub fn init(dir: &Path, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        fs::create_dir_all(dir)?;

        for name in Self::list_embedded() {
            let target = dir.join(&name);
            if target.exists() && !force {
                report.skipped.push(name);
                continue;
            }
            let data = Self::read_embedded(&name)?;
            fs::write(&target, data.as_ref())?;
            tracing::debug!(path = %target.display(), "Extracted template");
            report.written.push(name);
        }

        Ok(report)
    }
}
