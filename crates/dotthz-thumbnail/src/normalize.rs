use ndarray::Array2;

use crate::magnitude::MagnitudeGrid;

/// Display-ready 8-bit intensities, same shape as the [`MagnitudeGrid`] they came from
pub type IntensityGrid = Array2<u8>;

/// Rescale against the global maximum and quantize to `0..=255`.
///
/// The maximum maps to exactly 255. An all-zero grid maps to all zeros.
/// Non-finite magnitudes are left out of the maximum, NaN becomes 0 and infinity 255.
pub fn normalize(grid: &MagnitudeGrid) -> IntensityGrid {
    let max_val = finite_max(grid).unwrap_or(1.0);
    if max_val <= 0.0 {
        return grid.mapv(|magnitude| {
            if is_positive_infinity(magnitude) {
                255
            } else {
                0
            }
        });
    }
    grid.mapv(|magnitude| quantize(magnitude, max_val))
}

fn finite_max(grid: &MagnitudeGrid) -> Option<f64> {
    grid.iter()
        .copied()
        .filter(|m| m.is_finite())
        .reduce(f64::max)
}

fn is_positive_infinity(magnitude: f64) -> bool {
    magnitude.is_infinite() && magnitude.is_sign_positive()
}

#[inline]
fn quantize(magnitude: f64, max_val: f64) -> u8 {
    if magnitude.is_nan() {
        return 0;
    }
    let scaled = (magnitude / max_val).clamp(0.0, 1.0) * 255.0;
    // Clamped again, rounding may land a hair outside the range
    scaled.round().clamp(0.0, 255.0) as u8
}
