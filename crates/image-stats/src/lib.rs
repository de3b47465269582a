//! Image normalization and pairwise comparison statistics.
//!
//! Brings two arbitrary raster images to a canonical comparable form
//! (RGB, fixed resolution, per-channel min-max stretched) and quantifies
//! their similarity: MAE/MSE/RMSE, per-channel Pearson correlation,
//! per-channel KL divergence over value histograms, and the fraction of
//! significantly differing pixels. Best-effort descriptive analytics, not
//! a certified scientific pipeline.

pub mod error;
pub mod metrics;
pub mod normalize;
pub mod report;

pub use error::{StatsError, StatsResult};
pub use metrics::{compare, ComparisonReport, KL_BINS, SIGNIFICANT_DIFF_THRESHOLD};
pub use normalize::{load_normalized, stretch_channels, TargetSize};
pub use report::{format_text, ReportContext};
