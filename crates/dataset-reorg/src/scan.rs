//! Directory scanning and sweep filename parsing.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::plan::SweepFile;

/// Result of recursively scanning a source directory for sweep rasters.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub recognized: Vec<SweepFile>,
    pub unrecognized: usize,
    pub total: usize,
}

/// Parse `{...}_{...}_{...}_{timestamp}_sweep_{idx}.png` style names.
///
/// Requires at least six underscore-separated tokens, a timestamp at
/// token 3, and an integer sweep index at token 5 (extension stripped).
/// Returns `None` for anything else.
pub fn parse_sweep_filename(name: &str) -> Option<(String, u32)> {
    let parts: Vec<&str> = name.split('_').collect();
    if parts.len() < 6 {
        return None;
    }
    let timestamp = parts[3];
    if timestamp.is_empty() {
        return None;
    }
    let sweep_token = parts[5].split('.').next()?;
    let sweep: u32 = sweep_token.parse().ok()?;
    Some((timestamp.to_string(), sweep))
}

/// Walk `source_dir` collecting every `.png` file, splitting them into
/// recognized sweep files and a skip count. Unreadable directory entries
/// are skipped with a warning rather than aborting the scan.
pub fn scan_pngs(source_dir: &Path) -> ScanResult {
    let mut result = ScanResult::default();

    for entry in WalkDir::new(source_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path: PathBuf = entry.into_path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".png") {
            continue;
        }

        result.total += 1;
        match parse_sweep_filename(name) {
            Some((timestamp, sweep)) => result.recognized.push(SweepFile {
                timestamp,
                sweep,
                path,
            }),
            None => {
                warn!(file = name, "skipping file with unexpected name layout");
                result.unrecognized += 1;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_name() {
        let parsed = parse_sweep_filename("RDR_SSP_FQC_202501081335_sweep_1.png").unwrap();
        assert_eq!(parsed, ("202501081335".to_string(), 1));
    }

    #[test]
    fn parses_multi_digit_sweep() {
        let parsed = parse_sweep_filename("RDR_SSP_FQC_202501081340_sweep_12.png").unwrap();
        assert_eq!(parsed.1, 12);
    }

    #[test]
    fn rejects_short_names() {
        assert!(parse_sweep_filename("radar_202501081335.png").is_none());
    }

    #[test]
    fn rejects_non_numeric_sweep() {
        assert!(parse_sweep_filename("RDR_SSP_FQC_202501081335_sweep_x.png").is_none());
    }
}
