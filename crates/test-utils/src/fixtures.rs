//! Temp-directory fixtures for filesystem tests.

use std::fs;
use std::path::PathBuf;

use image::RgbImage;
use tempfile::TempDir;

/// A temp directory pre-populated with sweep-raster-style PNG names.
pub struct SweepPngDir {
    pub dir: TempDir,
}

impl SweepPngDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write an empty placeholder file with the standard sweep name layout.
    pub fn add_sweep(&self, timestamp: &str, sweep: u32) -> PathBuf {
        let path = self
            .dir
            .path()
            .join(format!("RDR_SSP_FQC_{}_sweep_{}.png", timestamp, sweep));
        fs::write(&path, b"placeholder").expect("write placeholder");
        path
    }

    /// Write a real PNG with the standard sweep name layout.
    pub fn add_sweep_image(&self, timestamp: &str, sweep: u32, img: &RgbImage) -> PathBuf {
        let path = self
            .dir
            .path()
            .join(format!("RDR_SSP_FQC_{}_sweep_{}.png", timestamp, sweep));
        img.save(&path).expect("save png");
        path
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Default for SweepPngDir {
    fn default() -> Self {
        Self::new()
    }
}
