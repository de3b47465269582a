//! Polar radar sweep to Cartesian raster conversion.
//!
//! The one genuinely algorithmic step in the toolkit: projecting a sweep's
//! (azimuth, range, reflectivity) samples onto a square pixel grid as a
//! quadrilateral mesh, colored through a fixed grayscale reflectivity
//! scale, over a black no-data background.

pub mod canvas;
pub mod error;
pub mod raster;
pub mod scale;

pub use canvas::Canvas;
pub use error::{RasterError, RasterResult};
pub use raster::{rasterize, RasterConfig};
pub use scale::{GrayscaleScale, REFLECTIVITY};
