//! Error types for image normalization and comparison.

use thiserror::Error;

pub type StatsResult<T> = Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<StatsError> for radar_common::RadarError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::DecodeError(msg) => radar_common::RadarError::ImageDecodeError(msg),
            StatsError::ShapeMismatch(msg) => radar_common::RadarError::ShapeMismatch(msg),
            StatsError::IoError(e) => radar_common::RadarError::IoError(e),
        }
    }
}
