//! CfRadial volume reading using the netcdf library.
//!
//! Reads the flat ray arrays (`azimuth`, `range`, sweep bounds) plus one
//! moment variable, applying `scale_factor`/`add_offset` and mapping the
//! variable's `_FillValue` to NaN, the same way the upstream CF conventions
//! expect readers to.

use std::path::Path;
use std::sync::Once;

use tracing::debug;

use crate::error::{CfRadialError, CfRadialResult};
use crate::volume::{RadarVolume, SweepBounds};

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose diagnostics to stderr even when errors
/// are handled gracefully on the Rust side (e.g., probing for optional
/// attributes). Call once before any NetCDF operation; safe to call again.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and passing null handlers to
        // disable error output is a documented valid use.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// Open a CfRadial file and load one moment variable as a [`RadarVolume`].
pub fn open_volume(path: &Path, moment: &str) -> CfRadialResult<RadarVolume> {
    silence_hdf5_errors();

    let nc_file = netcdf::open(path)
        .map_err(|e| CfRadialError::OpenError(format!("{}: {}", path.display(), e)))?;

    let azimuths: Vec<f32> = read_f32_values(&nc_file, "azimuth")?;
    let ranges: Vec<f32> = read_f32_values(&nc_file, "range")?;

    let starts: Vec<i64> = read_i64_values(&nc_file, "sweep_start_ray_index")?;
    let ends: Vec<i64> = read_i64_values(&nc_file, "sweep_end_ray_index")?;
    if starts.len() != ends.len() {
        return Err(CfRadialError::InvalidFormat(format!(
            "sweep bound arrays differ in length: {} vs {}",
            starts.len(),
            ends.len()
        )));
    }
    let sweep_bounds: Vec<SweepBounds> = starts
        .into_iter()
        .zip(ends)
        .map(|(start_ray, end_ray)| SweepBounds { start_ray, end_ray })
        .collect();

    // Optional; older files omit it.
    let elevations = read_f32_values(&nc_file, "fixed_angle").unwrap_or_default();

    let moment_var = nc_file
        .variable(moment)
        .ok_or_else(|| CfRadialError::MissingData(format!("variable '{}'", moment)))?;

    let raw: Vec<f32> = moment_var
        .get_values(..)
        .map_err(|e| CfRadialError::InvalidFormat(format!("failed to read {}: {}", moment, e)))?;

    let scale_factor = get_f32_attr(&moment_var, "scale_factor").unwrap_or(1.0);
    let add_offset = get_f32_attr(&moment_var, "add_offset").unwrap_or(0.0);
    let fill_value = get_f32_attr(&moment_var, "_FillValue");

    let values: Vec<f32> = raw
        .into_iter()
        .map(|v| {
            if fill_value.is_some_and(|fill| v == fill) {
                f32::NAN
            } else {
                v * scale_factor + add_offset
            }
        })
        .collect();

    debug!(
        path = %path.display(),
        moment,
        rays = azimuths.len(),
        gates = ranges.len(),
        sweeps = sweep_bounds.len(),
        "loaded radar volume"
    );

    Ok(RadarVolume {
        azimuths,
        ranges,
        values,
        sweep_bounds,
        elevations,
    })
}

/// Name and dimensions of one variable, for inspection output.
#[derive(Debug, Clone)]
pub struct VariableInfo {
    pub name: String,
    pub dimensions: Vec<(String, usize)>,
}

/// List all variables in a CfRadial file with their dimensions.
pub fn list_variables(path: &Path) -> CfRadialResult<Vec<VariableInfo>> {
    silence_hdf5_errors();

    let nc_file = netcdf::open(path)
        .map_err(|e| CfRadialError::OpenError(format!("{}: {}", path.display(), e)))?;

    Ok(nc_file
        .variables()
        .map(|var| VariableInfo {
            name: var.name().to_string(),
            dimensions: var
                .dimensions()
                .iter()
                .map(|dim| (dim.name().to_string(), dim.len()))
                .collect(),
        })
        .collect())
}

fn read_f32_values(file: &netcdf::File, name: &str) -> CfRadialResult<Vec<f32>> {
    let var = file
        .variable(name)
        .ok_or_else(|| CfRadialError::MissingData(format!("variable '{}'", name)))?;
    var.get_values(..)
        .map_err(|e| CfRadialError::InvalidFormat(format!("failed to read {}: {}", name, e)))
}

fn read_i64_values(file: &netcdf::File, name: &str) -> CfRadialResult<Vec<i64>> {
    let var = file
        .variable(name)
        .ok_or_else(|| CfRadialError::MissingData(format!("variable '{}'", name)))?;
    var.get_values(..)
        .map_err(|e| CfRadialError::InvalidFormat(format!("failed to read {}: {}", name, e)))
}

/// Check for an attribute without triggering HDF5 error spam.
fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

/// Helper to get an f32 attribute, converting from the stored numeric type.
fn get_f32_attr(var: &netcdf::Variable, name: &str) -> Option<f32> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f32::try_from(attr_value).ok()
}
