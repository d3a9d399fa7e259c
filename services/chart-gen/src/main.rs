//! Heatmap chart generator.
//!
//! Renders the sunshine heatmap and writes it as a PNG:
//! - Fixed six-city dataset with derived annual totals
//! - Optional JSON style file overriding the gradient stops
//! - Single confirmation line on success

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use heatmap::{
    cities, png, value_range, ColorScale, HeatmapChart, LayoutConfig, StyleConfig, DEFAULT_STOPS,
};

#[derive(Parser, Debug)]
#[command(name = "chart-gen")]
#[command(about = "Render the sunshine heatmap to a PNG file")]
struct Args {
    /// Output PNG path
    #[arg(short, long, default_value = "visualization.png")]
    output: PathBuf,

    /// JSON style file overriding the gradient stops
    #[arg(long)]
    style: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cities = cities();
    let (min_val, max_val) = value_range(&cities);
    info!(min_val, max_val, cities = cities.len(), "Prepared dataset");

    let stops = match &args.style {
        Some(path) => {
            let style = StyleConfig::from_file(path)
                .with_context(|| format!("failed to load style file {}", path.display()))?;
            info!(style = %style.name, stops = style.stops.len(), "Using style override");
            style.color_stops()?
        }
        None => DEFAULT_STOPS.to_vec(),
    };

    let scale = ColorScale::new(min_val, max_val, stops)?;
    let chart = HeatmapChart::new(&cities, scale, LayoutConfig::default());
    let image = chart.render()?;
    let (width, height) = image.dimensions();

    let bytes = png::encode_image(&image)?;
    fs::write(&args.output, &bytes)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Saved {} ({}x{})", args.output.display(), width, height);
    Ok(())
}
