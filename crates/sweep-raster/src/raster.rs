//! Polar-to-Cartesian sweep rasterization.
//!
//! A sweep is a non-uniform point cloud in polar coordinates: one sample
//! per (ray, gate). Each sample owns a quadrilateral cell whose corners sit
//! at the midpoints between adjacent azimuths and adjacent range gates
//! (edge rows/columns extrapolate by half the neighboring spacing). The
//! cells are projected with `x = r*sin(az)`, `y = r*cos(az)` (azimuth 0 =
//! north, image north-up) and filled onto a square canvas scaled so the
//! outermost range edge touches the image border.

use cfradial_parser::RadarSweep;
use tracing::trace;

use crate::canvas::Canvas;
use crate::error::{RasterError, RasterResult};
use crate::scale::GrayscaleScale;

/// Half-width used for the azimuth cell of a single-ray sweep, degrees.
/// A typical weather-radar beamwidth; only relevant when no neighboring
/// ray exists to take a midpoint against.
const SINGLE_RAY_HALF_WIDTH_DEG: f32 = 0.5;

/// Rasterization parameters.
#[derive(Debug, Clone, Copy)]
pub struct RasterConfig {
    /// Side length of the square output image, pixels.
    pub image_size: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self { image_size: 512 }
    }
}

/// Rasterize one sweep onto a fresh canvas.
///
/// Returns `Ok(None)` for an empty sweep (zero rays or zero gates): the
/// caller reports it as a skipped unit and writes no file.
pub fn rasterize(
    sweep: &RadarSweep<'_>,
    config: &RasterConfig,
    scale: &GrayscaleScale,
) -> RasterResult<Option<Canvas>> {
    let n_rays = sweep.ray_count();
    let n_gates = sweep.gate_count();
    if n_rays == 0 || n_gates == 0 {
        return Ok(None);
    }
    if sweep.values.len() != n_rays * n_gates {
        return Err(RasterError::ShapeMismatch(format!(
            "{} values for {} rays x {} gates",
            sweep.values.len(),
            n_rays,
            n_gates
        )));
    }

    let az_edges_deg = cell_edges(&unwrap_degrees(sweep.azimuths), SINGLE_RAY_HALF_WIDTH_DEG);
    let az_edges: Vec<f32> = az_edges_deg.iter().map(|a| a.to_radians()).collect();

    let single_gate_half = (sweep.ranges[0].abs() * 0.5).max(1.0);
    let mut r_edges = cell_edges(sweep.ranges, single_gate_half);
    if r_edges[0] < 0.0 {
        r_edges[0] = 0.0;
    }

    let max_radius = r_edges
        .iter()
        .fold(0.0f32, |acc, r| acc.max(r.abs()));
    if max_radius <= 0.0 {
        return Ok(None);
    }

    let size = config.image_size;
    let mut canvas = Canvas::new(size);
    let center = (size - 1) as f32 / 2.0;
    let px_per_meter = (size as f32 / 2.0 - 1.0) / max_radius;

    let to_pixel = |az: f32, r: f32| -> (f32, f32) {
        let x = r * az.sin();
        let y = r * az.cos();
        (center + x * px_per_meter, center - y * px_per_meter)
    };

    let mut cells_drawn = 0usize;
    for ray in 0..n_rays {
        for gate in 0..n_gates {
            let value = sweep.values[ray * n_gates + gate];
            let Some(intensity) = scale.intensity(value) else {
                continue;
            };
            let corners = [
                to_pixel(az_edges[ray], r_edges[gate]),
                to_pixel(az_edges[ray + 1], r_edges[gate]),
                to_pixel(az_edges[ray + 1], r_edges[gate + 1]),
                to_pixel(az_edges[ray], r_edges[gate + 1]),
            ];
            fill_quad(&mut canvas, &corners, intensity);
            cells_drawn += 1;
        }
    }

    trace!(
        rays = n_rays,
        gates = n_gates,
        cells_drawn,
        max_radius,
        "rasterized sweep"
    );
    Ok(Some(canvas))
}

/// Cell edge positions from cell center positions.
///
/// Interior edges are midpoints between adjacent centers; the two outer
/// edges extrapolate by half the neighboring spacing. A single center has
/// no spacing to infer, so `single_half_width` applies on both sides.
fn cell_edges(centers: &[f32], single_half_width: f32) -> Vec<f32> {
    let n = centers.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![
            centers[0] - single_half_width,
            centers[0] + single_half_width,
        ];
    }

    let mut edges = Vec::with_capacity(n + 1);
    edges.push(centers[0] - (centers[1] - centers[0]) / 2.0);
    for i in 1..n {
        edges.push((centers[i - 1] + centers[i]) / 2.0);
    }
    edges.push(centers[n - 1] + (centers[n - 1] - centers[n - 2]) / 2.0);
    edges
}

/// Make an azimuth sequence continuous across the 0/360 seam.
///
/// Sin/cos are periodic, so shifting angles by whole turns never moves a
/// sample; it only keeps midpoints between seam-adjacent rays sane
/// (e.g. 359.5 between 359 and 0, not 179.5).
fn unwrap_degrees(azimuths: &[f32]) -> Vec<f32> {
    let mut out = Vec::with_capacity(azimuths.len());
    let mut prev = azimuths[0];
    out.push(prev);
    for &az in &azimuths[1..] {
        let mut adjusted = az;
        while adjusted - prev > 180.0 {
            adjusted -= 360.0;
        }
        while prev - adjusted > 180.0 {
            adjusted += 360.0;
        }
        out.push(adjusted);
        prev = adjusted;
    }
    out
}

/// Scanline-fill a convex quadrilateral given in pixel coordinates.
///
/// Cells narrower than a scanline can miss every sampling point; those
/// fall back to a single pixel at the centroid so no finite sample
/// disappears from the raster entirely.
fn fill_quad(canvas: &mut Canvas, corners: &[(f32, f32); 4], intensity: u8) {
    let y_min = corners.iter().map(|c| c.1).fold(f32::INFINITY, f32::min);
    let y_max = corners
        .iter()
        .map(|c| c.1)
        .fold(f32::NEG_INFINITY, f32::max);

    let y_start = y_min.floor().max(0.0) as i64;
    let y_end = y_max.ceil().min(canvas.size() as f32) as i64;

    let mut filled = false;
    for y in y_start..y_end {
        let scan_y = y as f32 + 0.5;
        let mut x_low = f32::INFINITY;
        let mut x_high = f32::NEG_INFINITY;
        let mut hits = 0;

        for i in 0..4 {
            let (x0, y0) = corners[i];
            let (x1, y1) = corners[(i + 1) % 4];
            if (y0 <= scan_y && scan_y < y1) || (y1 <= scan_y && scan_y < y0) {
                let t = (scan_y - y0) / (y1 - y0);
                let x = x0 + t * (x1 - x0);
                x_low = x_low.min(x);
                x_high = x_high.max(x);
                hits += 1;
            }
        }

        if hits >= 2 {
            let x_start = x_low.floor() as i64;
            let x_end = x_high.ceil() as i64;
            for x in x_start..=x_end {
                canvas.set_gray(x, y, intensity);
            }
            filled = true;
        }
    }

    if !filled {
        let cx = corners.iter().map(|c| c.0).sum::<f32>() / 4.0;
        let cy = corners.iter().map(|c| c.1).sum::<f32>() / 4.0;
        canvas.set_gray(cx.round() as i64, cy.round() as i64, intensity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_from_uniform_centers() {
        let edges = cell_edges(&[10.0, 20.0, 30.0], 1.0);
        assert_eq!(edges, vec![5.0, 15.0, 25.0, 35.0]);
    }

    #[test]
    fn edges_single_center_uses_half_width() {
        let edges = cell_edges(&[10.0], 5.0);
        assert_eq!(edges, vec![5.0, 15.0]);
    }

    #[test]
    fn unwrap_handles_seam() {
        let unwrapped = unwrap_degrees(&[358.0, 359.0, 0.0, 1.0]);
        assert_eq!(unwrapped, vec![358.0, 359.0, 360.0, 361.0]);
    }

    #[test]
    fn unwrap_leaves_monotonic_alone() {
        let azimuths = [0.0, 90.0, 180.0, 270.0];
        assert_eq!(unwrap_degrees(&azimuths), azimuths.to_vec());
    }

    #[test]
    fn fill_quad_covers_axis_aligned_box() {
        let mut canvas = Canvas::new(16);
        let corners = [(2.0, 2.0), (10.0, 2.0), (10.0, 6.0), (2.0, 6.0)];
        fill_quad(&mut canvas, &corners, 200);
        assert_eq!(canvas.get_gray(5, 4), 200);
        assert_eq!(canvas.get_gray(5, 10), 0);
        assert!(canvas.non_background_count() >= 8 * 4);
    }

    #[test]
    fn fill_quad_subpixel_falls_back_to_centroid() {
        let mut canvas = Canvas::new(16);
        // Degenerate sliver well inside one pixel cell, off scanline centers.
        let corners = [(5.1, 5.9), (5.3, 5.9), (5.3, 5.95), (5.1, 5.95)];
        fill_quad(&mut canvas, &corners, 99);
        assert_eq!(canvas.non_background_count(), 1);
        assert_eq!(canvas.get_gray(5, 6), 99);
    }
}
