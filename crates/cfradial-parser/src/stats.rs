//! Per-sweep statistics for the standard radar moments.
//!
//! Drives the `nc-inspect` report: for every moment present in a volume,
//! a [`ValueStats`] summary per sweep, with fill values already mapped to
//! NaN by the reader and excluded from the figures.

use radar_common::ValueStats;

use crate::volume::RadarVolume;

/// Radar moment variables worth reporting on, in report order.
pub const RADAR_MOMENTS: &[&str] = &[
    "DBZH", "DBZV", "UH", "UV", "VELH", "VELV", "ZDR", "KDP", "RHOHV",
];

/// Statistics for one sweep of one moment.
#[derive(Debug)]
pub struct SweepStats {
    pub sweep_index: usize,
    pub elevation: f32,
    /// `None` when the sweep had no valid samples or malformed bounds.
    pub stats: Option<ValueStats>,
}

/// Summarize every sweep of a loaded volume.
///
/// Sweeps with malformed bounds yield `stats: None` rather than aborting
/// the report.
pub fn volume_stats(volume: &RadarVolume) -> Vec<SweepStats> {
    (0..volume.sweep_count())
        .map(|idx| match volume.sweep(idx) {
            Ok(sweep) => SweepStats {
                sweep_index: idx,
                elevation: sweep.elevation,
                stats: ValueStats::from_values(sweep.values.iter().copied()),
            },
            Err(_) => SweepStats {
                sweep_index: idx,
                elevation: volume.elevations.get(idx).copied().unwrap_or(0.0),
                stats: None,
            },
        })
        .collect()
}
