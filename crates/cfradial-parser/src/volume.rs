//! In-memory radar volume and sweep slicing.
//!
//! CfRadial stores all rays of a volume in one flat ray-major array, with
//! `sweep_start_ray_index`/`sweep_end_ray_index` marking where each sweep's
//! rays live. Bounds validation happens here, at slice time, so a single
//! inconsistent sweep skips only itself and leaves the rest of the volume
//! usable.

use radar_common::SkipReason;

/// Ray index bounds for one sweep (inclusive on both ends, CfRadial
/// convention). Stored as raw signed values so malformed files can be
/// diagnosed rather than panicking at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepBounds {
    pub start_ray: i64,
    pub end_ray: i64,
}

/// One radar scan at a fixed elevation angle, borrowed out of a volume.
#[derive(Debug)]
pub struct RadarSweep<'a> {
    /// Azimuth angle per ray, degrees clockwise from north.
    pub azimuths: &'a [f32],
    /// Range-gate center distances, meters from the radar.
    pub ranges: &'a [f32],
    /// Reflectivity grid, row-major (ray index x gate index); NaN = missing.
    pub values: &'a [f32],
    /// Fixed elevation angle of the sweep, degrees.
    pub elevation: f32,
}

impl RadarSweep<'_> {
    pub fn ray_count(&self) -> usize {
        self.azimuths.len()
    }

    pub fn gate_count(&self) -> usize {
        self.ranges.len()
    }

    /// A sweep with no rays or no gates has nothing to rasterize.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One decoded CfRadial volume: flat ray arrays plus per-sweep bounds.
///
/// Invariant (from the format): sweep bounds are contiguous and
/// non-overlapping across the flat ray array. Files that violate it are
/// handled per sweep via [`RadarVolume::sweep`].
#[derive(Debug, Clone)]
pub struct RadarVolume {
    /// Azimuth per ray for the whole volume, degrees.
    pub azimuths: Vec<f32>,
    /// Range-gate distances, meters (shared by all sweeps).
    pub ranges: Vec<f32>,
    /// Moment values for the whole volume, flattened ray-major; NaN = missing.
    pub values: Vec<f32>,
    /// Per-sweep ray index bounds.
    pub sweep_bounds: Vec<SweepBounds>,
    /// Per-sweep fixed elevation angles, degrees. May be empty if the file
    /// lacks `fixed_angle`; sweeps then report 0.0.
    pub elevations: Vec<f32>,
}

impl RadarVolume {
    pub fn sweep_count(&self) -> usize {
        self.sweep_bounds.len()
    }

    /// Slice one sweep out of the flat arrays, validating its bounds.
    ///
    /// Returns `Err(SkipReason)` for bounds inconsistent with the volume so
    /// batch drivers can skip just this sweep.
    pub fn sweep(&self, idx: usize) -> Result<RadarSweep<'_>, SkipReason> {
        let bounds = self.sweep_bounds.get(idx).copied().ok_or_else(|| {
            SkipReason::MalformedBounds(format!("sweep index {} out of range", idx))
        })?;

        if bounds.start_ray < 0 || bounds.end_ray < bounds.start_ray {
            return Err(SkipReason::MalformedBounds(format!(
                "sweep {}: start_ray={} end_ray={}",
                idx, bounds.start_ray, bounds.end_ray
            )));
        }

        let start = bounds.start_ray as usize;
        let end = bounds.end_ray as usize;
        let n_rays_total = self.azimuths.len();
        if end >= n_rays_total {
            return Err(SkipReason::MalformedBounds(format!(
                "sweep {}: end_ray={} exceeds ray count {}",
                idx, end, n_rays_total
            )));
        }

        let n_gates = self.ranges.len();
        let start_gate = start * n_gates;
        let end_gate = (end + 1) * n_gates;
        if end_gate > self.values.len() {
            return Err(SkipReason::MalformedBounds(format!(
                "sweep {}: gate range {}..{} exceeds data length {}",
                idx,
                start_gate,
                end_gate,
                self.values.len()
            )));
        }

        Ok(RadarSweep {
            azimuths: &self.azimuths[start..=end],
            ranges: &self.ranges,
            values: &self.values[start_gate..end_gate],
            elevation: self.elevations.get(idx).copied().unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(n_rays: usize, n_gates: usize, bounds: Vec<SweepBounds>) -> RadarVolume {
        RadarVolume {
            azimuths: (0..n_rays).map(|i| i as f32).collect(),
            ranges: (1..=n_gates).map(|i| i as f32 * 100.0).collect(),
            values: (0..n_rays * n_gates).map(|i| i as f32).collect(),
            sweep_bounds: bounds,
            elevations: vec![0.5],
        }
    }

    #[test]
    fn slices_contiguous_sweeps() {
        let vol = volume(
            6,
            4,
            vec![
                SweepBounds { start_ray: 0, end_ray: 2 },
                SweepBounds { start_ray: 3, end_ray: 5 },
            ],
        );

        let first = vol.sweep(0).unwrap();
        assert_eq!(first.ray_count(), 3);
        assert_eq!(first.gate_count(), 4);
        assert_eq!(first.values.len(), 12);
        assert_eq!(first.values[0], 0.0);

        let second = vol.sweep(1).unwrap();
        assert_eq!(second.values[0], 12.0);
        assert_eq!(second.azimuths, &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn rejects_reversed_bounds() {
        let vol = volume(6, 4, vec![SweepBounds { start_ray: 4, end_ray: 1 }]);
        let err = vol.sweep(0).unwrap_err();
        assert!(matches!(err, SkipReason::MalformedBounds(_)));
    }

    #[test]
    fn rejects_end_ray_past_volume() {
        let vol = volume(6, 4, vec![SweepBounds { start_ray: 0, end_ray: 6 }]);
        assert!(matches!(
            vol.sweep(0).unwrap_err(),
            SkipReason::MalformedBounds(_)
        ));
    }

    #[test]
    fn rejects_negative_start() {
        let vol = volume(6, 4, vec![SweepBounds { start_ray: -1, end_ray: 2 }]);
        assert!(matches!(
            vol.sweep(0).unwrap_err(),
            SkipReason::MalformedBounds(_)
        ));
    }

    #[test]
    fn sweep_index_out_of_range() {
        let vol = volume(6, 4, vec![]);
        assert!(vol.sweep(0).is_err());
    }

    #[test]
    fn zero_gate_sweep_is_empty() {
        let vol = volume(3, 0, vec![SweepBounds { start_ray: 0, end_ray: 2 }]);
        let sweep = vol.sweep(0).unwrap();
        assert!(sweep.is_empty());
    }
}
