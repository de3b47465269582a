//! Error types for CfRadial parsing operations.

use thiserror::Error;

/// Result type for CfRadial parser operations.
pub type CfRadialResult<T> = Result<T, CfRadialError>;

/// Error types for CfRadial parsing.
#[derive(Error, Debug)]
pub enum CfRadialError {
    /// File could not be opened or is not a NetCDF file
    #[error("Failed to open volume: {0}")]
    OpenError(String),

    /// Missing required variable or attribute
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl From<CfRadialError> for radar_common::RadarError {
    fn from(err: CfRadialError) -> Self {
        match err {
            CfRadialError::MissingData(msg) => radar_common::RadarError::MissingData(msg),
            other => radar_common::RadarError::NetCdfError(other.to_string()),
        }
    }
}
