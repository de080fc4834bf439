//! demviz CLI: decode a GeoTIFF, report statistics, and export the
//! false-color raster and heightmap mesh.

use clap::Parser;
use demviz_core::ColorScale;
use demviz_viewer::{write_obj, write_png, ViewerSession};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "demviz", about = "Render a single-band elevation GeoTIFF")]
struct Args {
    /// Input GeoTIFF (.tif / .tiff).
    input: PathBuf,

    /// Color scale for the false-color render.
    #[arg(long, default_value = "viridis")]
    scale: String,

    /// Vertical exaggeration factor (clamped to 0.0-10.0).
    #[arg(long, default_value_t = 1.0)]
    exaggeration: f64,

    /// Write the colorized raster as an RGBA PNG.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Write the heightmap mesh as a Wavefront OBJ.
    #[arg(long)]
    mesh: Option<PathBuf>,

    /// Print the elevation statistics as JSON.
    #[arg(long)]
    stats_json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> demviz_viewer::Result<()> {
    // Reject an unknown scale before doing any decode work.
    let scale = ColorScale::from_name(&args.scale)?;

    let mut session = ViewerSession::new();
    let dataset = session.load_file(&args.input)?;

    let stats = *dataset.statistics();
    info!(
        min = stats.min,
        max = stats.max,
        mean = stats.mean,
        std_dev = stats.std_dev,
        nodata = ?stats.nodata,
        "elevation statistics"
    );

    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    if let Some(path) = &args.png {
        let buffer = session.colorize(scale.name())?;
        write_png(&buffer, path)?;
    }

    if let Some(path) = &args.mesh {
        let mesh = session.build_or_update_mesh(args.exaggeration)?;
        write_obj(mesh, path)?;
    }

    Ok(())
}
