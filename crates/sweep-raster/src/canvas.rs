//! Square RGB canvas with a black no-data background.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{RasterError, RasterResult};

/// Fixed-size square pixel grid, 8-bit RGB, initialized to black.
///
/// Black is the sentinel for "no data"; grayscale intensities from the
/// reflectivity scale are written as equal R/G/B.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: u32,
    pixels: RgbImage,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            pixels: ImageBuffer::from_pixel(size, size, Rgb([0, 0, 0])),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Write a grayscale intensity; out-of-bounds coordinates are ignored.
    pub fn set_gray(&mut self, x: i64, y: i64, intensity: u8) {
        if x < 0 || y < 0 || x >= self.size as i64 || y >= self.size as i64 {
            return;
        }
        self.pixels
            .put_pixel(x as u32, y as u32, Rgb([intensity, intensity, intensity]));
    }

    pub fn get_gray(&self, x: u32, y: u32) -> u8 {
        self.pixels.get_pixel(x, y)[0]
    }

    /// Count of pixels that differ from the black background.
    pub fn non_background_count(&self) -> usize {
        self.pixels.pixels().filter(|p| p[0] != 0).count()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbImage {
        self.pixels
    }

    /// Encode as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> RasterResult<()> {
        self.pixels
            .save(path)
            .map_err(|e| RasterError::WriteError(format!("{}: {}", path.display(), e)))
    }
}
