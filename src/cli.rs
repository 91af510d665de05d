use crate::config::{Config, load_config};
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::parser::parse_tags;
use crate::render::{render_svg, write_output_png, write_output_svg};
use crate::theme::Theme;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tagcloud", version, about = "Deterministic tag cloud layout and renderer")]
pub struct Args {
    /// Input tags.json file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png/json). Defaults to stdout for SVG and JSON if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config file (JSON or JSON5)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Search query; non-matching tags are dimmed
    #[arg(short = 'q', long = "query")]
    pub query: Option<String>,

    /// Color theme, overrides the config file
    #[arg(short = 't', long = "theme", value_enum)]
    pub theme: Option<ThemeChoice>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Dark,
    Light,
}

pub fn run() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let config = apply_args(load_config(args.config.as_deref())?, &args);

    let input = read_input(args.input.as_deref())?;
    let set = parse_tags(&input)?;
    tracing::info!(tags = set.len(), "laying out tag cloud");
    let layout = compute_layout(&set.tags, &config.layout);
    if layout.degraded() > 0 {
        tracing::warn!(
            degraded = layout.degraded(),
            "some tags could not find a clear spot and may overlap"
        );
    }

    match args.output_format {
        OutputFormat::Json => write_layout_dump(args.output.as_deref(), &layout, &set.tags)?,
        OutputFormat::Svg => {
            let svg = render_svg(
                &set.tags,
                &layout,
                &config.theme,
                &config.layout,
                &config.render,
                args.query.as_deref(),
            );
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            let svg = render_svg(
                &set.tags,
                &layout,
                &config.theme,
                &config.layout,
                &config.render,
                args.query.as_deref(),
            );
            write_output_png(&svg, &output, &config.render)?;
        }
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(choice) = args.theme {
        config.theme = match choice {
            ThemeChoice::Dark => Theme::matrix_dark(),
            ThemeChoice::Light => Theme::matrix_light(),
        };
        config.render.background = config.theme.background.clone();
    }
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    config
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(std::fs::read_to_string(path)?);
        }
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
