//! Error types for sweep rasterization.

use thiserror::Error;

/// Result type for rasterizer operations.
pub type RasterResult<T> = Result<T, RasterError>;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to write image: {0}")]
    WriteError(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
}

impl From<RasterError> for radar_common::RadarError {
    fn from(err: RasterError) -> Self {
        match err {
            RasterError::ShapeMismatch(msg) => radar_common::RadarError::ShapeMismatch(msg),
            other => radar_common::RadarError::RenderError(other.to_string()),
        }
    }
}
