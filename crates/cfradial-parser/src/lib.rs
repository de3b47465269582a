//! CfRadial (NetCDF) radar volume reader.
//!
//! CfRadial files store a whole volume scan as flat ray-major arrays:
//! one `azimuth` entry per ray across all sweeps, a shared `range` axis,
//! and `sweep_start_ray_index`/`sweep_end_ray_index` marking each sweep's
//! slice of the ray array. Moment variables (DBZH etc.) are stored with
//! optional packing (`scale_factor`/`add_offset`) and a `_FillValue`
//! sentinel for missing gates.
//!
//! This crate reads those files with the `netcdf` library and exposes:
//! - [`RadarVolume`] / [`RadarSweep`]: decoded volume with validated
//!   per-sweep slicing (bad bounds skip one sweep, not the file),
//! - [`stats`]: per-sweep descriptive statistics for the standard moments,
//! - [`reader::list_variables`]: structural inspection.

pub mod error;
pub mod reader;
pub mod stats;
pub mod volume;

pub use error::{CfRadialError, CfRadialResult};
pub use reader::{list_variables, open_volume, silence_hdf5_errors, VariableInfo};
pub use stats::{volume_stats, SweepStats, RADAR_MOMENTS};
pub use volume::{RadarSweep, RadarVolume, SweepBounds};
