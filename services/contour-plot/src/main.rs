//! Contour plot command-line tool.
//!
//! Reads a delimited sample file and renders it as a filled contour map
//! (PNG or SVG).

mod config_loader;
mod loader;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use contour_map::{ColorMode, ContourMap, DrawSummary, RecordingRenderer};
use renderer::{CanvasRenderer, SvgRenderer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config_loader::{ConfigLayer, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "contour-plot")]
#[command(about = "Render gridded samples as a filled contour map")]
struct Args {
    /// Delimited sample file, one grid row per line
    input: PathBuf,

    /// YAML or JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Spacing between band boundaries
    #[arg(long)]
    iso_step: Option<f64>,

    /// Upsampling factor (1 = none)
    #[arg(long)]
    interpolation_factor: Option<usize>,

    /// Colour ramp: color or monochromatic
    #[arg(long)]
    color_mode: Option<ColorMode>,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Value delimiter ("\t", "tab", "comma", or any literal string)
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Background colour (#rrggbb or #rrggbbaa); transparent if unset
    #[arg(long)]
    background: Option<String>,

    /// Output file (default: input file name with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "png")]
    format: OutputFormat,

    /// Classify only and print a summary, without writing output
    #[arg(long)]
    dry_run: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn flag_layer(&self) -> ConfigLayer {
        ConfigLayer {
            iso_step: self.iso_step,
            interpolation_factor: self.interpolation_factor,
            color_mode: self.color_mode,
            surface_width: self.width,
            surface_height: self.height,
            delimiter: self.delimiter.clone(),
            background: self.background.clone(),
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension(self.format.extension()))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let file = args
        .config
        .as_ref()
        .map(config_loader::load_config_file)
        .transpose()?;
    let settings = config_loader::resolve(|k| std::env::var(k).ok(), file, args.flag_layer())?;

    info!(
        input = %args.input.display(),
        iso_step = settings.map.iso_step,
        factor = settings.map.interpolation_factor,
        color_mode = %settings.map.color_mode,
        "Starting contour plot"
    );

    let grid = loader::load_grid(&args.input, &settings.delimiter)?;
    let map = ContourMap::new(grid, settings.map.clone())?;

    if args.dry_run {
        let mut recorder = RecordingRenderer::new();
        let summary = map.draw(&mut recorder)?;
        print_summary(&summary);
        return Ok(());
    }

    let output = args.output_path();
    let summary = match args.format {
        OutputFormat::Png => write_png(&map, &settings, &output)?,
        OutputFormat::Svg => write_svg(&map, &settings, &output)?,
    };

    info!(
        output = %output.display(),
        cells = summary.emitted,
        bands = summary.colors,
        "Wrote contour map"
    );

    Ok(())
}

fn surface_pixels(value: f64, name: &str) -> Result<u32> {
    let px = value.round();
    if !(1.0..=u32::MAX as f64).contains(&px) {
        anyhow::bail!("{} of {} does not round to a pixel size", name, value);
    }
    Ok(px as u32)
}

fn write_png(map: &ContourMap, settings: &Settings, output: &Path) -> Result<DrawSummary> {
    let width = surface_pixels(settings.map.surface_width, "surface_width")?;
    let height = surface_pixels(settings.map.surface_height, "surface_height")?;

    let mut canvas = CanvasRenderer::new(width, height)?;
    if let Some(bg) = settings.background {
        canvas = canvas.with_background(bg);
    }

    let summary = map.draw(&mut canvas)?;
    let bytes = canvas.encode_png()?;
    fs::write(output, bytes).with_context(|| format!("Failed to write {:?}", output))?;
    Ok(summary)
}

fn write_svg(map: &ContourMap, settings: &Settings, output: &Path) -> Result<DrawSummary> {
    let mut svg = SvgRenderer::new(settings.map.surface_width, settings.map.surface_height);
    if let Some(bg) = settings.background {
        svg = svg.with_background(bg);
    }

    let summary = map.draw(&mut svg)?;
    fs::write(output, svg.finish()).with_context(|| format!("Failed to write {:?}", output))?;
    Ok(summary)
}

fn print_summary(summary: &DrawSummary) {
    println!("dense grid:  {} x {}", summary.rows, summary.cols);
    println!("boundaries:  {}", summary.boundaries);
    println!("bands:       {}", summary.colors);
    println!("cells drawn: {}", summary.emitted);
    println!("saddles:     {}", summary.saddles);
}
