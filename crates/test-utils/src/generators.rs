//! Synthetic radar volumes and images for tests.

use cfradial_parser::{RadarVolume, SweepBounds};
use image::{Rgb, RgbImage};

/// A volume with `sweeps` contiguous sweeps of `rays_per_sweep` rays and
/// `gates` gates each. Azimuths are spread evenly over the circle per
/// sweep; reflectivity ramps linearly from 0 to 60 dBZ along each ray.
pub fn synthetic_volume(sweeps: usize, rays_per_sweep: usize, gates: usize) -> RadarVolume {
    let total_rays = sweeps * rays_per_sweep;
    let azimuths: Vec<f32> = (0..total_rays)
        .map(|i| (i % rays_per_sweep) as f32 * 360.0 / rays_per_sweep.max(1) as f32)
        .collect();
    let ranges: Vec<f32> = (1..=gates).map(|g| g as f32 * 250.0).collect();
    let values: Vec<f32> = (0..total_rays)
        .flat_map(|_| (0..gates).map(|g| g as f32 * 60.0 / gates.max(1) as f32))
        .collect();
    let sweep_bounds: Vec<SweepBounds> = (0..sweeps)
        .map(|s| SweepBounds {
            start_ray: (s * rays_per_sweep) as i64,
            end_ray: (s * rays_per_sweep + rays_per_sweep - 1) as i64,
        })
        .collect();
    let elevations: Vec<f32> = (0..sweeps).map(|s| 0.5 + s as f32).collect();

    RadarVolume {
        azimuths,
        ranges,
        values,
        sweep_bounds,
        elevations,
    }
}

/// Deterministic RGB test image with per-channel gradients.
pub fn gradient_image(width: u32, height: u32, seed: u8) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let base = x.wrapping_add(y.wrapping_mul(width)) as u8;
        Rgb([
            base.wrapping_mul(seed),
            base.wrapping_mul(seed.wrapping_add(3)),
            255u8.wrapping_sub(base.wrapping_mul(seed)),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_volume_sweeps_slice_cleanly() {
        let volume = synthetic_volume(3, 8, 4);
        assert_eq!(volume.sweep_count(), 3);
        for idx in 0..3 {
            let sweep = volume.sweep(idx).unwrap();
            assert_eq!(sweep.ray_count(), 8);
            assert_eq!(sweep.gate_count(), 4);
            assert_eq!(sweep.values.len(), 32);
        }
    }

    #[test]
    fn gradient_image_is_deterministic() {
        assert_eq!(gradient_image(16, 16, 5), gradient_image(16, 16, 5));
        assert_ne!(gradient_image(16, 16, 5), gradient_image(16, 16, 6));
    }
}
