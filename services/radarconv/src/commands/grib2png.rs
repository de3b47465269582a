//! `grib2png`: render one GRIB2 field as a grayscale PNG.
//!
//! Each grid point is splatted onto a canvas scaled from the field's
//! lat/lon bounding box. Intensity follows a logarithmic scale from a
//! fixed floor up to the field maximum; values at or below the floor and
//! missing values stay on the black background.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use image::{Rgb, RgbImage};
use tracing::info;

use crate::gribfile::{read_field, GribField};

#[derive(Debug)]
pub struct Grib2PngConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub message: usize,
    pub width: u32,
    pub floor: f32,
}

pub fn run(config: &Grib2PngConfig) -> Result<()> {
    let field = read_field(&config.input, config.message)?;
    let image = render_field(&field, config.width, config.floor)?;
    image
        .save(&config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    info!(
        output = %config.output.display(),
        width = image.width(),
        height = image.height(),
        "rendered GRIB2 field"
    );
    Ok(())
}

/// Render a decoded field onto a black canvas, width fixed and height
/// following the grid's lat/lon aspect ratio.
pub fn render_field(field: &GribField, width: u32, floor: f32) -> Result<RgbImage> {
    if field.values.is_empty() {
        bail!("field contains no values");
    }

    let mut min_lat = f32::INFINITY;
    let mut max_lat = f32::NEG_INFINITY;
    let mut min_lon = f32::INFINITY;
    let mut max_lon = f32::NEG_INFINITY;
    for &(lat, lon) in &field.latlons {
        min_lat = min_lat.min(lat);
        max_lat = max_lat.max(lat);
        min_lon = min_lon.min(lon);
        max_lon = max_lon.max(lon);
    }
    let lat_span = (max_lat - min_lat).max(f32::EPSILON);
    let lon_span = (max_lon - min_lon).max(f32::EPSILON);

    let height = ((width as f32 * lat_span / lon_span).round() as u32).max(1);

    let max_value = field
        .values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f32::NEG_INFINITY, f32::max);

    let mut image = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));
    if !(max_value > floor) {
        // Nothing above the floor: the canvas stays black.
        return Ok(image);
    }

    for (&value, &(lat, lon)) in field.values.iter().zip(&field.latlons) {
        let Some(intensity) = log_intensity(value, floor, max_value) else {
            continue;
        };
        let x = ((lon - min_lon) / lon_span * (width - 1) as f32).round() as u32;
        let y = ((max_lat - lat) / lat_span * (height - 1) as f32).round() as u32;
        if x < width && y < height {
            image.put_pixel(x, y, Rgb([intensity, intensity, intensity]));
        }
    }

    Ok(image)
}

/// Logarithmic grayscale mapping over (floor, max]. Values at or below
/// the floor (and non-finite values) are treated as background.
pub fn log_intensity(value: f32, floor: f32, max_value: f32) -> Option<u8> {
    if !value.is_finite() || value <= floor || max_value <= floor {
        return None;
    }
    let t = (value.ln() - floor.ln()) / (max_value.ln() - floor.ln());
    Some((t.clamp(0.0, 1.0) * 255.0).round() as u8)
}
