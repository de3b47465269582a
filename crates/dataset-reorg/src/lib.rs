//! Reorganizes per-timestamp sweep rasters into fixed-size case folders.
//!
//! Sweep rasters are named like `RDR_SSP_FQC_202501081335_sweep_1.png`:
//! underscore-separated tokens with the timestamp at token 3 and the sweep
//! index at token 5. For each timestamp only the lowest-elevation sweep
//! (minimum sweep index) is kept; the selected files, sorted by timestamp,
//! are copied into case folders of a fixed frame count. A remainder smaller
//! than one full case is dropped, not padded.

pub mod plan;
pub mod scan;

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::plan::{build_cases, select_lowest_sweeps, CasePlan};
use crate::scan::scan_pngs;

pub use crate::plan::{Case, SweepFile};
pub use crate::scan::parse_sweep_filename;

/// Configuration for one reorganization run.
#[derive(Debug, Clone)]
pub struct ReorgConfig {
    /// Frames copied into each case folder.
    pub frames_per_case: usize,
}

impl Default for ReorgConfig {
    fn default() -> Self {
        Self { frames_per_case: 29 }
    }
}

/// Summary of a completed reorganization.
#[derive(Debug, Default)]
pub struct ReorgSummary {
    pub files_scanned: usize,
    pub files_unrecognized: usize,
    pub timestamps: usize,
    pub cases_created: usize,
    pub files_copied: usize,
    pub files_dropped: usize,
}

/// Scan `source_dir` recursively, plan cases, and copy files under
/// `target_dir`.
///
/// Unrecognized filenames are logged and skipped. Failures to create the
/// target directory or copy a file are environment errors and abort the
/// run.
pub fn reorganize(
    source_dir: &Path,
    target_dir: &Path,
    config: &ReorgConfig,
) -> std::io::Result<ReorgSummary> {
    let scan = scan_pngs(source_dir);
    let selected = select_lowest_sweeps(scan.recognized);
    let timestamps = selected.len();
    let plan = build_cases(selected, config.frames_per_case);

    fs::create_dir_all(target_dir)?;

    let mut summary = ReorgSummary {
        files_scanned: scan.total,
        files_unrecognized: scan.unrecognized,
        timestamps,
        files_dropped: plan.dropped,
        ..Default::default()
    };

    for case in &plan.cases {
        let case_dir = target_dir.join(&case.id);
        fs::create_dir_all(&case_dir)?;
        for (frame_idx, file) in case.frames.iter().enumerate() {
            let target = case_dir.join(format!("{}-{:02}.png", case.id, frame_idx));
            fs::copy(&file.path, &target)?;
            summary.files_copied += 1;
        }
        summary.cases_created += 1;
        info!(case = %case.id, frames = case.frames.len(), "case written");
    }

    if plan.dropped > 0 {
        warn!(
            dropped = plan.dropped,
            frames_per_case = config.frames_per_case,
            "leftover timestamps smaller than one case were dropped"
        );
    }

    Ok(summary)
}

/// Plan without copying, for dry runs and tests.
pub fn plan_cases(source_dir: &Path, config: &ReorgConfig) -> CasePlan {
    let scan = scan_pngs(source_dir);
    build_cases(select_lowest_sweeps(scan.recognized), config.frames_per_case)
}
