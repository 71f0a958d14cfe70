use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexshade::assets::AssetLoader;
use hexshade::models::{AppConfig, GenerateOptions, GenerateRequest, OutlineMode};
use hexshade::rendering::{render_swatch_png, SwatchOutlines};
use hexshade::services::{generate, GeneratedShader, LospecClient, PaletteSource, TemplateService};
use shade_palette::{ByteColor, Palette};

const CONFIG_ENV: &str = "HEXSHADE_CONFIG";

#[derive(Parser)]
#[command(name = "hexshade", version)]
#[command(about = "Convert hex color palettes into GLSL vec3 arrays")]
struct Cli {
    /// YAML config file (defaults to $HEXSHADE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert hex colors from a file, --colors or stdin
    Convert {
        /// File with one hex color per line (or comma separated)
        #[arg(short, long, conflicts_with = "colors")]
        input: Option<PathBuf>,

        /// Colors as comma-separated hex (e.g. "#000000,#FFFFFF,#FF0000")
        #[arg(short, long)]
        colors: Option<String>,

        #[command(flatten)]
        outline: OutlineArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Fetch a named palette from the palette site and convert it
    Fetch {
        /// Palette name or slug (e.g. "Endesga 32" or "endesga-32")
        name: String,

        #[command(flatten)]
        outline: OutlineArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the palette entry closest to a target color
    Match {
        /// Target color
        #[arg(short, long, value_name = "HEX")]
        target: ByteColor,

        /// Palette colors
        #[arg(required = true, value_name = "COLORS")]
        colors: Vec<String>,
    },
    /// Extract the embedded template for customization
    Init {
        /// Target directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded templates without extracting
        #[arg(long)]
        list: bool,
    },
}

#[derive(Args, Debug, Default)]
struct OutlineArgs {
    /// Pick outline colors from the palette (closest to black and white)
    #[arg(long, conflicts_with_all = ["outline", "outline_dark", "outline_light"])]
    auto_outline: bool,

    /// One custom color for both outline constants
    #[arg(long, value_name = "HEX", conflicts_with_all = ["outline_dark", "outline_light"])]
    outline: Option<ByteColor>,

    /// Custom dark outline (needs --outline-light)
    #[arg(long, value_name = "HEX", requires = "outline_light")]
    outline_dark: Option<ByteColor>,

    /// Custom light outline (needs --outline-dark)
    #[arg(long, value_name = "HEX", requires = "outline_dark")]
    outline_light: Option<ByteColor>,
}

impl OutlineArgs {
    fn mode(&self) -> OutlineMode {
        match (self.outline, self.outline_dark, self.outline_light) {
            (Some(color), _, _) => OutlineMode::uniform(color),
            (None, Some(dark), Some(light)) => OutlineMode::Custom { dark, light },
            _ if self.auto_outline => OutlineMode::Auto,
            _ => OutlineMode::None,
        }
    }
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Write shader source here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a swatch preview PNG
    #[arg(short, long, value_name = "PNG")]
    preview: Option<PathBuf>,

    /// Template file replacing the embedded one
    #[arg(short, long)]
    template: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    let default_filter = if cli.verbose {
        "hexshade=debug"
    } else {
        "hexshade=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Convert {
            input,
            colors,
            outline,
            output,
        }) => {
            let config = AppConfig::load(config_path.as_deref());
            run_convert_command(&config, input.as_deref(), colors, &outline, &output)
        }
        Some(Commands::Fetch {
            name,
            outline,
            output,
        }) => {
            let config = AppConfig::load(config_path.as_deref());
            run_fetch_command(&config, &name, &outline, &output)
        }
        Some(Commands::Match { target, colors }) => run_match_command(target, &colors),
        Some(Commands::Init { dir, force, list }) => run_init_command(&dir, force, list),
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

/// Convert a local palette to shader source
fn run_convert_command(
    config: &AppConfig,
    input: Option<&Path>,
    colors: Option<String>,
    outline: &OutlineArgs,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let text = match (colors, input) {
        (Some(colors), _) => colors,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read palette from stdin")?;
            text
        }
    };

    let request = GenerateRequest::from_text(text, generate_options(config, outline));
    let shader = generate(request, &template_service(config, output))?;
    emit(config, &shader, output)
}

/// Fetch a remote palette and convert it
fn run_fetch_command(
    config: &AppConfig,
    name: &str,
    outline: &OutlineArgs,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let client = LospecClient::new(&config.api)?;
    let palette = client.fetch(name)?;

    if let Some(credit) = palette.attribution() {
        eprintln!("Fetched {credit} ({} colors)", palette.palette.len());
    }

    let request = GenerateRequest::from_palette(palette, generate_options(config, outline));
    let shader = generate(request, &template_service(config, output))?;
    emit(config, &shader, output)
}

/// Print the index and color closest to `target`
fn run_match_command(target: ByteColor, colors: &[String]) -> anyhow::Result<()> {
    let palette = Palette::from_hex(colors)?;
    let idx = palette.closest_index(target);
    let color = palette.get(idx).unwrap_or(target);
    println!("{idx} {color}");
    Ok(())
}

/// Extract embedded templates to the filesystem
fn run_init_command(dir: &Path, force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded templates:");
        for name in AssetLoader::list_embedded() {
            println!("  {name}");
        }
        return Ok(());
    }

    let report = AssetLoader::init(dir, force)
        .with_context(|| format!("Failed to extract templates into {}", dir.display()))?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

/// Display version and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Hexshade v{VERSION} - hex palettes to GLSL\n");

    let config_source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (file not found, using defaults)", path.display()),
        None => format!("defaults ({CONFIG_ENV} not set)"),
    };
    let config = AppConfig::load(config_path);

    println!("Configuration:");
    println!("  Config:   {config_source}");
    println!("  API:      {}", config.api.base_url);
    match config.output.template {
        Some(ref path) => println!("  Template: {}", path.display()),
        None => println!(
            "  Template: embedded ({})",
            AssetLoader::list_embedded().join(", ")
        ),
    }

    println!("\nCommands:");
    println!("  hexshade convert   Convert hex colors to GLSL");
    println!("  hexshade fetch     Fetch a named palette and convert it");
    println!("  hexshade match     Find the closest palette entry");
    println!("  hexshade init      Extract the embedded template");
    println!("\nRun 'hexshade --help' for more details.");
}

fn generate_options(config: &AppConfig, outline: &OutlineArgs) -> GenerateOptions {
    GenerateOptions {
        outline: outline.mode(),
        names: config.output.names.clone(),
    }
}

fn template_service(config: &AppConfig, output: &OutputArgs) -> TemplateService {
    let template = output
        .template
        .clone()
        .or_else(|| config.output.template.clone());
    TemplateService::new(AssetLoader::new(template))
}

/// Write shader source and the optional preview
fn emit(config: &AppConfig, shader: &GeneratedShader, output: &OutputArgs) -> anyhow::Result<()> {
    match output.output {
        Some(ref path) => {
            std::fs::write(path, &shader.source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {} ({} colors)", path.display(), shader.palette.palette.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(shader.source.as_bytes())?;
            if !shader.source.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    if let Some(ref path) = output.preview {
        let outlines = match (shader.dark_outline, shader.light_outline) {
            (Some(dark), Some(light)) => Some(SwatchOutlines {
                dark: dark.color,
                light: light.color,
            }),
            _ => None,
        };
        let png_bytes = render_swatch_png(&shader.palette.palette, outlines, config.preview)?;
        std::fs::write(path, &png_bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Rendered {} ({} bytes)", path.display(), png_bytes.len());
    }

    Ok(())
}
