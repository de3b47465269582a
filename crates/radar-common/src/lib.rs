//! Common types shared across the radar-dataset-tools workspace.

pub mod error;
pub mod outcome;
pub mod stats;

pub use error::{RadarError, RadarResult};
pub use outcome::{BatchSummary, FileOutcome, SkipReason, SweepOutcome};
pub use stats::ValueStats;
