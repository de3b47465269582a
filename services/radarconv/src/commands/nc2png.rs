//! `nc2png`: batch CfRadial-to-PNG conversion.
//!
//! One file, then one sweep at a time; per-unit failures skip the unit
//! and the batch continues. Only output-side I/O (create dir, write PNG,
//! write archive) aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use cfradial_parser::open_volume;
use radar_common::{BatchSummary, FileOutcome, SkipReason, SweepOutcome};
use sweep_raster::{rasterize, RasterConfig, REFLECTIVITY};

use crate::archive;

#[derive(Debug)]
pub struct Nc2PngConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub variable: String,
    pub image_size: u32,
    pub archive: Option<PathBuf>,
}

pub fn run(config: &Nc2PngConfig) -> Result<()> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let inputs = collect_inputs(&config.input)?;
    if inputs.is_empty() {
        warn!(input = %config.input.display(), "no .nc files found");
        return Ok(());
    }
    info!(count = inputs.len(), "found NetCDF files");

    let raster_config = RasterConfig {
        image_size: config.image_size,
    };

    let mut summary = BatchSummary::default();
    let mut outcomes = Vec::with_capacity(inputs.len());
    for (idx, path) in inputs.iter().enumerate() {
        info!(
            file = %path.display(),
            progress = format!("{}/{}", idx + 1, inputs.len()),
            "processing file"
        );
        let outcome = convert_file(path, config, &raster_config)?;
        summary.record_file(&outcome);
        outcomes.push(outcome);
    }

    info!(
        files_processed = summary.files_processed,
        files_skipped = summary.files_skipped,
        sweeps_converted = summary.units_converted,
        sweeps_skipped = summary.units_skipped,
        "batch complete"
    );

    if let Some(archive_path) = &config.archive {
        let outputs = BatchSummary::collect_outputs(&outcomes);
        if outputs.is_empty() {
            info!("no PNG files were generated, skipping archive");
        } else {
            archive::bundle(&outputs, &config.output_dir, archive_path)?;
            info!(archive = %archive_path.display(), files = outputs.len(), "archive written");
        }
    }

    Ok(())
}

/// Convert all sweeps of one volume file.
///
/// Per-unit problems come back inside the `FileOutcome`; the `Err` branch
/// is reserved for output-side failures that abort the batch.
pub fn convert_file(
    path: &Path,
    config: &Nc2PngConfig,
    raster_config: &RasterConfig,
) -> Result<FileOutcome> {
    let volume = match open_volume(path, &config.variable) {
        Ok(volume) => volume,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "skipping unreadable volume");
            return Ok(FileOutcome::Skipped(SkipReason::UnreadableInput(
                e.to_string(),
            )));
        }
    };

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("volume");

    let mut sweeps = Vec::with_capacity(volume.sweep_count());
    for sweep_idx in 0..volume.sweep_count() {
        let sweep = match volume.sweep(sweep_idx) {
            Ok(sweep) => sweep,
            Err(reason) => {
                warn!(file = %path.display(), sweep = sweep_idx, reason = %reason, "skipping sweep");
                sweeps.push(SweepOutcome::Skipped(reason));
                continue;
            }
        };

        match rasterize(&sweep, raster_config, &REFLECTIVITY) {
            Ok(Some(canvas)) => {
                let out_path = config
                    .output_dir
                    .join(format!("{}_sweep_{}.png", stem, sweep_idx));
                canvas
                    .save_png(&out_path)
                    .map_err(radar_common::RadarError::from)
                    .with_context(|| format!("failed to write {}", out_path.display()))?;
                info!(output = %out_path.display(), "generated");
                sweeps.push(SweepOutcome::Converted(out_path));
            }
            Ok(None) => {
                warn!(file = %path.display(), sweep = sweep_idx, "empty sweep, skipped");
                sweeps.push(SweepOutcome::Skipped(SkipReason::EmptySweep));
            }
            Err(e) => {
                // Shape mismatch means this sweep's arrays are inconsistent.
                warn!(file = %path.display(), sweep = sweep_idx, error = %e, "skipping sweep");
                sweeps.push(SweepOutcome::Skipped(SkipReason::MalformedBounds(
                    e.to_string(),
                )));
            }
        }
    }

    Ok(FileOutcome::Processed(sweeps))
}

fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut files: Vec<PathBuf> = fs::read_dir(input)
        .with_context(|| format!("failed to read input directory {}", input.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("nc")
        })
        .collect();
    files.sort();
    Ok(files)
}
