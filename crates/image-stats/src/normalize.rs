//! Canonicalization of arbitrary input images for comparison.
//!
//! Pipeline: force 3-channel RGB (grayscale broadcasts), Lanczos3 resize
//! to the target resolution, then an independent per-channel min-max
//! stretch to the full [0, 255] range. A constant channel is left as-is;
//! stretching it would divide by zero and there is nothing to stretch.

use std::path::Path;

use image::imageops::FilterType;
use image::RgbImage;
use tracing::debug;

use crate::error::{StatsError, StatsResult};

/// Target resolution for normalized images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl Default for TargetSize {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

/// Load an image file and bring it to canonical comparable form.
///
/// Returns the normalized image together with the original dimensions
/// (reported in comparison output).
pub fn load_normalized(path: &Path, target: TargetSize) -> StatsResult<(RgbImage, (u32, u32))> {
    let decoded = image::open(path)
        .map_err(|e| StatsError::DecodeError(format!("{}: {}", path.display(), e)))?;
    let original_size = (decoded.width(), decoded.height());

    let rgb = decoded.to_rgb8();
    let resized = image::imageops::resize(&rgb, target.width, target.height, FilterType::Lanczos3);
    let normalized = stretch_channels(&resized);

    debug!(
        path = %path.display(),
        original_width = original_size.0,
        original_height = original_size.1,
        "normalized image"
    );
    Ok((normalized, original_size))
}

/// Per-channel min-max stretch to [0, 255].
///
/// Channels where max == min are returned unchanged (deliberate no-op, not
/// an error). Applying the stretch twice is a fixed point: once a channel
/// spans the full range, the transform is the identity.
pub fn stretch_channels(img: &RgbImage) -> RgbImage {
    let mut min = [255u8; 3];
    let mut max = [0u8; 3];
    for pixel in img.pixels() {
        for c in 0..3 {
            min[c] = min[c].min(pixel[c]);
            max[c] = max[c].max(pixel[c]);
        }
    }

    let mut out = img.clone();
    for c in 0..3 {
        if max[c] == min[c] {
            continue;
        }
        let low = min[c] as f32;
        let span = (max[c] - min[c]) as f32;
        for pixel in out.pixels_mut() {
            pixel[c] = ((pixel[c] as f32 - low) * 255.0 / span).round() as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn stretch_expands_to_full_range() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([100, 50, 10]));
        img.put_pixel(1, 0, Rgb([150, 50, 20]));

        let out = stretch_channels(&img);
        // Red: 100..150 -> 0..255
        assert_eq!(out.get_pixel(0, 0)[0], 0);
        assert_eq!(out.get_pixel(1, 0)[0], 255);
        // Green constant: untouched
        assert_eq!(out.get_pixel(0, 0)[1], 50);
        assert_eq!(out.get_pixel(1, 0)[1], 50);
        // Blue: 10..20 -> 0..255
        assert_eq!(out.get_pixel(0, 0)[2], 0);
        assert_eq!(out.get_pixel(1, 0)[2], 255);
    }

    #[test]
    fn stretch_is_idempotent_on_full_range() {
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([77, 128, 200]));
        img.put_pixel(2, 0, Rgb([255, 255, 255]));

        let once = stretch_channels(&img);
        let twice = stretch_channels(&once);
        assert_eq!(once, img, "full-range channels are already canonical");
        assert_eq!(twice, once);
    }

    #[test]
    fn constant_image_is_untouched() {
        let img = RgbImage::from_pixel(4, 4, Rgb([42, 42, 42]));
        assert_eq!(stretch_channels(&img), img);
    }
}
