//! Error types for radar dataset tools.

use thiserror::Error;

/// Result type alias using RadarError.
pub type RadarResult<T> = Result<T, RadarError>;

/// Primary error type for conversion and analysis operations.
///
/// Variants split along the taxonomy the batch drivers care about:
/// input/decode problems are per-unit (skip and continue), environment
/// problems (I/O on the output side) abort the batch.
#[derive(Debug, Error)]
pub enum RadarError {
    // === Input Errors ===
    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Invalid NetCDF data: {0}")]
    NetCdfError(String),

    #[error("Failed to decode image: {0}")]
    ImageDecodeError(String),

    // === Shape / Geometry Errors ===
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    // === Environment Errors ===
    // Readers map their open/read failures into the input variants above;
    // raw I/O errors here come from the output side (create dir, write file).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
