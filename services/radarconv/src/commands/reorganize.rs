//! `reorganize`: wire the dataset-reorg crate to the CLI.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use dataset_reorg::{reorganize, ReorgConfig};

pub fn run(source: &Path, target: &Path, frames_per_case: usize) -> Result<()> {
    let summary = reorganize(source, target, &ReorgConfig { frames_per_case })
        .with_context(|| format!("reorganization into {} failed", target.display()))?;

    info!(
        scanned = summary.files_scanned,
        unrecognized = summary.files_unrecognized,
        timestamps = summary.timestamps,
        cases = summary.cases_created,
        copied = summary.files_copied,
        dropped = summary.files_dropped,
        "reorganization complete"
    );

    if summary.cases_created == 0 {
        info!(
            frames_per_case,
            "not enough qualifying files for a single complete case"
        );
    }

    Ok(())
}
