//! `compare`: normalize two rasters and write a statistics report.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use image_stats::{compare, format_text, load_normalized, ReportContext, TargetSize};

pub fn run(first: &Path, second: &Path, output_dir: &Path, size: u32) -> Result<()> {
    let target = TargetSize {
        width: size,
        height: size,
    };

    let (first_img, first_size) = load_normalized(first, target)
        .with_context(|| format!("failed to load {}", first.display()))?;
    let (second_img, second_size) = load_normalized(second, target)
        .with_context(|| format!("failed to load {}", second.display()))?;

    let report = compare(&first_img, &second_img)?;

    let first_label = first.display().to_string();
    let second_label = second.display().to_string();
    let ctx = ReportContext {
        first_label: &first_label,
        second_label: &second_label,
        first_original_size: first_size,
        second_original_size: second_size,
        target,
    };
    let text = format_text(&report, &ctx);
    print!("{}", text);

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let report_path = output_dir.join("statistics.txt");
    fs::write(&report_path, &text)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    // Machine-readable copy of the same metrics.
    let json_path = output_dir.join("statistics.json");
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    fs::write(&json_path, json)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    info!(report = %report_path.display(), "statistics written");

    Ok(())
}
