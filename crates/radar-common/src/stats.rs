//! Descriptive statistics over scalar fields.
//!
//! Shared by the NetCDF and GRIB2 inspection commands; fill values are
//! expected to arrive as NaN and are excluded from every figure.

use serde::Serialize;

/// Summary statistics for one set of field values.
#[derive(Debug, Clone, Serialize)]
pub struct ValueStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl ValueStats {
    /// Compute stats over the finite values in `values`.
    ///
    /// Returns `None` when no finite values remain (all-fill field).
    pub fn from_values(values: impl IntoIterator<Item = f32>) -> Option<Self> {
        let mut finite: Vec<f64> = values
            .into_iter()
            .filter(|v| v.is_finite())
            .map(f64::from)
            .collect();
        if finite.is_empty() {
            return None;
        }

        finite.sort_by(f64::total_cmp);
        let count = finite.len();
        let min = finite[0];
        let max = finite[count - 1];
        let mean = finite.iter().sum::<f64>() / count as f64;
        let median = if count % 2 == 1 {
            finite[count / 2]
        } else {
            (finite[count / 2 - 1] + finite[count / 2]) / 2.0
        };
        let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_stats() {
        let stats = ValueStats::from_values([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
        assert!((stats.std_dev - 1.118033988749895).abs() < 1e-12);
    }

    #[test]
    fn nan_values_excluded() {
        let stats = ValueStats::from_values([f32::NAN, 5.0, f32::NAN, 7.0, 6.0]).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.median, 6.0);
    }

    #[test]
    fn all_nan_yields_none() {
        assert!(ValueStats::from_values([f32::NAN, f32::NAN]).is_none());
    }
}
