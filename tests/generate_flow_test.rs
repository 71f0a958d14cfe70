//! End-to-end flow tests covering complete user scenarios.

mod common;

use common::fixtures::{self, palettes};
use common::{fetch_blocking, MockPaletteServer};
use hexshade::assets::AssetLoader;
use hexshade::models::{AppConfig, GenerateOptions, GenerateRequest, OutlineMode};
use hexshade::rendering::{render_swatch_png, SwatchOutlines};
use hexshade::services::{generate, TemplateService};
use pretty_assertions::assert_eq;
use shade_palette::ByteColor;
use std::io::Cursor;
use tempfile::TempDir;

fn default_options(outline: OutlineMode) -> GenerateOptions {
    GenerateOptions {
        outline,
        names: Default::default(),
    }
}

fn png_size(bytes: &[u8]) -> (u32, u32) {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let reader = decoder.read_info().expect("valid PNG");
    (reader.info().width, reader.info().height)
}

#[test]
fn test_local_palette_to_glsl() {
    let templates = TemplateService::new(AssetLoader::default());
    let request = GenerateRequest::from_text(palettes::BASIC, default_options(OutlineMode::None));

    let shader = generate(request, &templates).unwrap();

    assert_eq!(shader.source.trim_end(), fixtures::BASIC_GLSL);
}

#[test]
fn test_mixed_separators_and_shorthand() {
    let templates = TemplateService::new(AssetLoader::default());
    let request = GenerateRequest::from_text(palettes::MIXED, default_options(OutlineMode::Auto));

    let shader = generate(request, &templates).unwrap();

    assert!(shader.source.starts_with("const int colorNum = 5;\n"));
    // "fff" expands to white and is the lightest entry
    assert_eq!(shader.light_outline.map(|o| o.index), Some(Some(4)));
    assert!(shader
        .source
        .contains("const vec3 lightOutline = vec3(1.0000000, 1.0000000, 1.0000000);"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_generate_and_preview() {
    let server = MockPaletteServer::start().await;
    server
        .mock_palette("sweetie-4", fixtures::credited_palette())
        .await;

    // Step 1: fetch by display name
    let palette = fetch_blocking(&server, "Sweetie 4").await.unwrap();

    // Step 2: generate with automatic outlines
    let templates = TemplateService::new(AssetLoader::default());
    let request = GenerateRequest::from_palette(palette, default_options(OutlineMode::Auto));
    let shader = generate(request, &templates).unwrap();

    assert!(shader
        .source
        .starts_with("// Palette: Sweetie 4 by GrafxKid\nconst int colorNum = 4;\n"));
    assert!(shader
        .source
        .contains("const vec3 darkOutline = vec3(0.1019608, 0.1098039, 0.1725490);"));
    assert!(shader
        .source
        .contains("const vec3 lightOutline = vec3(0.9568627, 0.9568627, 0.9568627);"));
    assert_eq!(shader.dark_outline.map(|o| o.index), Some(Some(0)));
    assert_eq!(shader.light_outline.map(|o| o.index), Some(Some(3)));

    // Step 3: preview
    let outlines = SwatchOutlines {
        dark: shader.dark_outline.unwrap().color,
        light: shader.light_outline.unwrap().color,
    };
    let config = AppConfig::default();
    let png_bytes = render_swatch_png(&shader.palette.palette, Some(outlines), config.preview)
        .unwrap();

    // 4 tiles of 32px with 2px gaps, plus a 16px footer
    assert_eq!(png_size(&png_bytes), (138, 54));
}

#[test]
fn test_config_names_and_external_template() {
    let dir = TempDir::new().unwrap();
    let template_path = dir.path().join("mini.glsl");
    std::fs::write(
        &template_path,
        "{{ names.array }}:{% for c in colors %} {{ c | vec3 }}{% endfor %}",
    )
    .unwrap();

    let config = AppConfig::from_yaml(&format!(
        "output:\n  array: swatch\n  template: {}\n",
        template_path.display()
    ))
    .unwrap();

    let templates = TemplateService::new(AssetLoader::new(config.output.template.clone()));
    let request = GenerateRequest::from_text(
        "#ff0000",
        GenerateOptions {
            outline: OutlineMode::None,
            names: config.output.names.clone(),
        },
    );
    let shader = generate(request, &templates).unwrap();

    assert_eq!(shader.source, "swatch: vec3(1.0000000, 0.0000000, 0.0000000)");
}

#[test]
fn test_init_then_customize_template() {
    let dir = TempDir::new().unwrap();

    let report = AssetLoader::init(dir.path(), false).unwrap();
    assert_eq!(report.written, vec!["palette.glsl".to_string()]);

    // Extracted template renders the same as the embedded one
    let extracted = dir.path().join("palette.glsl");
    let templates = TemplateService::new(AssetLoader::new(Some(extracted)));
    let request = GenerateRequest::from_text(palettes::BASIC, default_options(OutlineMode::None));
    let shader = generate(request, &templates).unwrap();
    assert_eq!(shader.source.trim_end(), fixtures::BASIC_GLSL);

    // Second run leaves the file alone
    let report = AssetLoader::init(dir.path(), false).unwrap();
    assert!(report.written.is_empty());
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn test_uniform_custom_outline() {
    let templates = TemplateService::new(AssetLoader::default());
    let request = GenerateRequest::from_text(
        palettes::BASIC,
        default_options(OutlineMode::uniform(ByteColor::new(0, 0, 255))),
    );
    let shader = generate(request, &templates).unwrap();

    let blue = "vec3(0.0000000, 0.0000000, 1.0000000);";
    assert!(shader
        .source
        .contains(&format!("const vec3 darkOutline = {blue}")));
    assert!(shader
        .source
        .contains(&format!("const vec3 lightOutline = {blue}")));
}
