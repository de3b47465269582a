//! Radar dataset conversion toolkit.
//!
//! Batch commands for turning weather-radar data into PNG training
//! rasters and inspecting what came out:
//! - `nc2png` / `nc-inspect`: CfRadial volumes (polar sweeps)
//! - `grib2png` / `grib-inspect`: GRIB2 fields
//! - `compare`: pixel statistics between two rasters
//! - `reorganize`: lowest-sweep selection into fixed-size case folders
//! - `download`: bulk retrieval from an HTTP index page

mod archive;
mod commands;
mod download;
mod gribfile;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "radarconv")]
#[command(about = "Weather radar data conversion and analysis toolkit")]
struct Args {
    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert CfRadial NetCDF volumes to per-sweep PNG rasters
    Nc2png {
        /// Input .nc file or a directory of .nc files
        input: PathBuf,

        /// Directory for generated PNGs
        #[arg(short, long, default_value = "png_output")]
        output_dir: PathBuf,

        /// Moment variable to rasterize
        #[arg(long, default_value = "DBZH")]
        variable: String,

        /// Side length of the square output images, pixels
        #[arg(long, default_value = "512")]
        image_size: u32,

        /// Bundle all generated PNGs into this .tar.gz after the run
        #[arg(long)]
        archive: Option<PathBuf>,
    },

    /// Dump structure and per-sweep moment statistics of a CfRadial file
    NcInspect {
        /// Input .nc file
        input: PathBuf,
    },

    /// Render one GRIB2 message as a grayscale PNG
    Grib2png {
        /// Input .grib2 file
        input: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "grib_field.png")]
        output: PathBuf,

        /// 1-based message number to render
        #[arg(long, default_value = "1")]
        message: usize,

        /// Output image width, pixels (height follows the grid aspect)
        #[arg(long, default_value = "1024")]
        width: u32,

        /// Lower floor of the logarithmic intensity scale
        #[arg(long, default_value = "0.1")]
        floor: f32,
    },

    /// List GRIB2 messages and optional value statistics
    GribInspect {
        /// Input .grib2 file
        input: PathBuf,

        /// Also decode values and print per-message statistics
        #[arg(long)]
        stats: bool,

        /// Ignore values below this bound in statistics
        #[arg(long, default_value = "-1000", allow_hyphen_values = true)]
        lower: f32,

        /// Ignore values above this bound in statistics
        #[arg(long, default_value = "1000")]
        upper: f32,
    },

    /// Compare two raster images and write a statistics report
    Compare {
        /// First image (KL divergence is measured from this one)
        first: PathBuf,

        /// Second image
        second: PathBuf,

        /// Directory for the statistics report
        #[arg(short, long, default_value = "comparison_results")]
        output_dir: PathBuf,

        /// Normalized comparison resolution (square)
        #[arg(long, default_value = "512")]
        size: u32,
    },

    /// Group sweep rasters into fixed-size case folders
    Reorganize {
        /// Directory containing sweep PNGs (scanned recursively)
        source: PathBuf,

        /// Directory for case folders
        target: PathBuf,

        /// Frames per case folder
        #[arg(long, default_value = "29")]
        frames_per_case: usize,
    },

    /// Download all linked files with a given extension from an HTTP index
    Download {
        /// Index page URL
        url: String,

        /// Directory for downloaded files
        #[arg(short, long, default_value = "downloads")]
        output_dir: PathBuf,

        /// Only download links ending with this extension
        #[arg(long, default_value = ".gz")]
        extension: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

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
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Nc2png {
            input,
            output_dir,
            variable,
            image_size,
            archive,
        } => commands::nc2png::run(&commands::nc2png::Nc2PngConfig {
            input,
            output_dir,
            variable,
            image_size,
            archive,
        }),
        Command::NcInspect { input } => commands::nc_inspect::run(&input),
        Command::Grib2png {
            input,
            output,
            message,
            width,
            floor,
        } => commands::grib2png::run(&commands::grib2png::Grib2PngConfig {
            input,
            output,
            message,
            width,
            floor,
        }),
        Command::GribInspect {
            input,
            stats,
            lower,
            upper,
        } => commands::grib_inspect::run(&input, stats, lower, upper),
        Command::Compare {
            first,
            second,
            output_dir,
            size,
        } => commands::compare::run(&first, &second, &output_dir, size),
        Command::Reorganize {
            source,
            target,
            frames_per_case,
        } => commands::reorganize::run(&source, &target, frames_per_case),
        Command::Download {
            url,
            output_dir,
            extension,
        } => download::run(&url, &output_dir, &extension).await,
    }
}
