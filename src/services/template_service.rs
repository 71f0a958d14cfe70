use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::assets::AssetLoader;
use shade_palette::{format_vec3, NormalizedColor};

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}

/// Service for rendering shader source templates with Tera
pub struct TemplateService {
    assets: AssetLoader,
}

impl TemplateService {
    /// Create a new template service
    pub fn new(assets: AssetLoader) -> Self {
        tracing::debug!(
            template = %assets.template_name(),
            external = assets.template_file().is_some(),
            "Template service initialized"
        );
        Self { assets }
    }

    /// Register custom Tera filters
    fn register_filters(tera: &mut Tera) {
        // vec3 filter: [r, g, b] -> vec3(R, G, B) with fixed precision
        tera.register_filter(
            "vec3",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let channels = tera::try_get_value!("vec3", "value", Vec<f64>, value);
                match channels.as_slice() {
                    [r, g, b] => Ok(tera::Value::String(format_vec3(NormalizedColor::new(
                        *r, *g, *b,
                    )))),
                    _ => Err(tera::Error::msg(format!(
                        "Filter `vec3` expects 3 channels, got {}",
                        channels.len()
                    ))),
                }
            },
        );
    }

    /// Render the active template with the given data
    ///
    /// Templates are loaded fresh from disk on every call so edits show up
    /// immediately.
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        let template_name = self.assets.template_name();

        let template_content = self.assets.read_template_string().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TemplateError::NotFound(
                    self.assets
                        .template_file()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| template_name.clone()),
                )
            } else {
                TemplateError::Io(e)
            }
        })?;

        let mut tera = Tera::default();
        Self::register_filters(&mut tera);
        tera.add_raw_template(&template_name, &template_content)?;

        let context = Context::from_serialize(data)?;
        let source = tera.render(&template_name, &context)?;

        Ok(source)
    }
}
