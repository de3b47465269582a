//! Pixel-wise comparison metrics between two normalized images.
//!
//! All metrics operate on [0,1]-scaled values and are pure functions of
//! the two pixel arrays. MAE/MSE/RMSE and per-channel correlation are
//! symmetric between the inputs; KL divergence is computed from the first
//! image's histogram to the second's and is deliberately asymmetric.

use image::RgbImage;
use serde::Serialize;

use crate::error::{StatsError, StatsResult};

/// Histogram bins per channel for KL divergence.
pub const KL_BINS: usize = 50;

/// Additive epsilon applied to both histograms before the divergence sum.
const KL_EPSILON: f64 = 1e-10;

/// Absolute normalized difference above which a pixel counts as
/// significantly different.
pub const SIGNIFICANT_DIFF_THRESHOLD: f64 = 0.1;

/// Comparison metrics between two images of identical shape.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub mae: f64,
    pub mse: f64,
    pub rmse: f64,
    /// Pearson correlation per channel (R, G, B). NaN for a constant
    /// channel, where correlation is undefined.
    pub correlations: [f64; 3],
    /// KL divergence per channel, first image relative to second.
    pub kl_divergences: [f64; 3],
    /// Fraction of samples (all pixels, all channels) whose absolute
    /// difference exceeds [`SIGNIFICANT_DIFF_THRESHOLD`].
    pub significant_diff_ratio: f64,
}

/// Compare two normalized images.
///
/// The images must have identical dimensions; comparing differently sized
/// images is a caller error (normalize first).
pub fn compare(img1: &RgbImage, img2: &RgbImage) -> StatsResult<ComparisonReport> {
    if img1.dimensions() != img2.dimensions() {
        return Err(StatsError::ShapeMismatch(format!(
            "{}x{} vs {}x{}",
            img1.width(),
            img1.height(),
            img2.width(),
            img2.height()
        )));
    }

    let a: Vec<f64> = img1.as_raw().iter().map(|&v| v as f64 / 255.0).collect();
    let b: Vec<f64> = img2.as_raw().iter().map(|&v| v as f64 / 255.0).collect();
    let n = a.len() as f64;

    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut significant = 0usize;
    for (&x, &y) in a.iter().zip(&b) {
        let diff = x - y;
        abs_sum += diff.abs();
        sq_sum += diff * diff;
        if diff.abs() > SIGNIFICANT_DIFF_THRESHOLD {
            significant += 1;
        }
    }
    let mae = abs_sum / n;
    let mse = sq_sum / n;

    let mut correlations = [0.0; 3];
    let mut kl_divergences = [0.0; 3];
    for channel in 0..3 {
        let xs = channel_values(&a, channel);
        let ys = channel_values(&b, channel);
        correlations[channel] = pearson(&xs, &ys);
        kl_divergences[channel] = kl_divergence(&histogram_density(&xs), &histogram_density(&ys));
    }

    Ok(ComparisonReport {
        mae,
        mse,
        rmse: mse.sqrt(),
        correlations,
        kl_divergences,
        significant_diff_ratio: significant as f64 / n,
    })
}

fn channel_values(interleaved: &[f64], channel: usize) -> Vec<f64> {
    interleaved
        .iter()
        .skip(channel)
        .step_by(3)
        .copied()
        .collect()
}

/// Pearson correlation coefficient; NaN when either side is constant.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Equal-width histogram over [0,1], normalized to a probability density
/// (count x bins / total, since the bin width is 1/bins). Values at
/// exactly 1.0 fall into the last bin.
fn histogram_density(values: &[f64]) -> [f64; KL_BINS] {
    let mut counts = [0usize; KL_BINS];
    for &v in values {
        let bin = ((v * KL_BINS as f64) as usize).min(KL_BINS - 1);
        counts[bin] += 1;
    }
    let total = values.len() as f64;
    let mut density = [0.0; KL_BINS];
    for (slot, &count) in density.iter_mut().zip(&counts) {
        *slot = count as f64 * KL_BINS as f64 / total;
    }
    density
}

fn kl_divergence(p: &[f64; KL_BINS], q: &[f64; KL_BINS]) -> f64 {
    p.iter()
        .zip(q)
        .map(|(&p_i, &q_i)| {
            let p_i = p_i + KL_EPSILON;
            let q_i = q_i + KL_EPSILON;
            p_i * (p_i / q_i).ln()
        })
        .sum()
}
