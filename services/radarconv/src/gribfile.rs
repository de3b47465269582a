//! Thin wrapper over the `grib` crate: message listing and field decode.
//!
//! GRIB2 parsing itself is entirely the decoder crate's job; this module
//! only adapts its iterator API to the toolkit's needs (1-based message
//! numbers, collected value/grid vectors).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Metadata for one GRIB2 submessage.
#[derive(Debug, Clone)]
pub struct MessageInfo {
    /// 1-based message number in file order.
    pub number: usize,
    pub discipline: String,
    pub grid_template: String,
    pub product_template: String,
}

/// One decoded 2-D field with its lat/lon grid.
#[derive(Debug)]
pub struct GribField {
    pub values: Vec<f32>,
    /// (latitude, longitude) in degrees, one entry per value.
    pub latlons: Vec<(f32, f32)>,
}

fn grib_err(what: &str, err: impl std::fmt::Debug) -> anyhow::Error {
    anyhow::anyhow!("{}: {:?}", what, err)
}

/// List all messages, optionally decoding each message's values.
pub fn read_all(path: &Path, with_values: bool) -> Result<Vec<(MessageInfo, Option<Vec<f32>>)>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let grib2 = grib::from_reader(reader).map_err(|e| grib_err("failed to parse GRIB2", e))?;

    let mut messages = Vec::new();
    for (number, (_index, submessage)) in grib2.iter().enumerate() {
        let info = MessageInfo {
            number: number + 1,
            discipline: format!("{:?}", submessage.indicator().discipline),
            grid_template: submessage.grid_def().grid_tmpl_num().to_string(),
            product_template: submessage.prod_def().prod_tmpl_num().to_string(),
        };
        let values = if with_values {
            let decoder = grib::Grib2SubmessageDecoder::from(submessage)
                .map_err(|e| grib_err("failed to create decoder", e))?;
            let decoded = decoder
                .dispatch()
                .map_err(|e| grib_err("failed to decode values", e))?;
            Some(decoded.collect())
        } else {
            None
        };
        messages.push((info, values));
    }
    Ok(messages)
}

/// Decode one message (1-based) together with its lat/lon grid.
pub fn read_field(path: &Path, message: usize) -> Result<GribField> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let grib2 = grib::from_reader(reader).map_err(|e| grib_err("failed to parse GRIB2", e))?;

    for (number, (_index, submessage)) in grib2.iter().enumerate() {
        if number + 1 != message {
            continue;
        }
        let latlons: Vec<(f32, f32)> = submessage
            .latlons()
            .map_err(|e| grib_err("message has no lat/lon grid", e))?
            .collect();
        let decoder = grib::Grib2SubmessageDecoder::from(submessage)
            .map_err(|e| grib_err("failed to create decoder", e))?;
        let values: Vec<f32> = decoder
            .dispatch()
            .map_err(|e| grib_err("failed to decode values", e))?
            .collect();

        if values.len() != latlons.len() {
            bail!(
                "decoded {} values but grid has {} points",
                values.len(),
                latlons.len()
            );
        }
        return Ok(GribField { values, latlons });
    }

    bail!("message {} not found in {}", message, path.display());
}
