//! gridmap: plot colored Irish Grid references over an outline of Ireland.
//!
//! Reads `color, gridref` entries from a file and writes one image (PNG or
//! SVG) to stdout. Invalid entries are reported on stderr and skipped.

mod pipeline;

use anyhow::{bail, Context, Result};
use clap::Parser;
use renderer::{LandMask, Layout, OutputFormat};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "gridmap")]
#[command(about = "Plot colored Irish Grid references over the Ireland outline")]
struct Args {
    /// Input file: one `color, gridref` entry per line
    input: PathBuf,

    /// Side of one drawn square in pixels
    #[arg(short, long, default_value_t = 5)]
    square_size: u32,

    /// Output format: png or svg
    #[arg(short, long, default_value = "png")]
    format: String,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // Diagnostics go to stderr; stdout carries only the image.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if args.square_size == 0 {
        bail!("square size must be positive");
    }
    let format = match args.format.to_lowercase().as_str() {
        "png" | "raster" => OutputFormat::Raster,
        "svg" | "vector" => OutputFormat::Vector,
        other => bail!("unsupported output format: {}", other),
    };

    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read input file {}", args.input.display()))?;

    let records = pipeline::collect_records(&input);
    info!(records = records.len(), "collected valid records");

    let layout = Layout::new(args.square_size);
    let image = renderer::render(&LandMask::ireland(), &records, &layout, format)
        .context("rendering failed")?;

    std::io::stdout()
        .write_all(&image)
        .context("cannot write image to stdout")?;

    Ok(())
}
