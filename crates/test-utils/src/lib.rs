//! Shared test utilities for the radar-dataset-tools workspace.
//!
//! Provides synthetic radar volumes/sweeps, deterministic test images,
//! and temp-directory fixtures so crate tests don't need real CfRadial or
//! GRIB2 files on disk.
//!
//! Add to a crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;
