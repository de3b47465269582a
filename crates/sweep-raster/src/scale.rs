//! Reflectivity-to-grayscale value mapping.

/// Linear grayscale scale over a fixed dBZ window.
///
/// Values outside the window clamp to the boundary intensity; they are
/// never dropped. Missing samples (NaN) map to `None` and leave the
/// background untouched.
#[derive(Debug, Clone, Copy)]
pub struct GrayscaleScale {
    pub min_dbz: f32,
    pub max_dbz: f32,
}

/// Standard reflectivity window used for all sweep rasters.
pub const REFLECTIVITY: GrayscaleScale = GrayscaleScale {
    min_dbz: -20.0,
    max_dbz: 80.0,
};

impl GrayscaleScale {
    /// Map a reflectivity value to an 8-bit intensity.
    pub fn intensity(&self, value: f32) -> Option<u8> {
        if !value.is_finite() {
            return None;
        }
        let clamped = value.clamp(self.min_dbz, self.max_dbz);
        let t = (clamped - self.min_dbz) / (self.max_dbz - self.min_dbz);
        Some((t * 255.0).round() as u8)
    }
}
