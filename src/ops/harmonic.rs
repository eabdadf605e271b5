//! Harmonic mean of two values.

/// `2 x0 x1 / (x0 + x1)`, double precision.
#[inline(always)]
pub fn harmonic_mean(x0: f64, x1: f64) -> f64 {
    (2.0 * x0 * x1) / (x0 + x1)
}

/// `2 x0 x1 / (x0 + x1)`, single precision.
#[inline(always)]
pub fn harmonic_mean_f32(x0: f32, x1: f32) -> f32 {
    (2.0 * x0 * x1) / (x0 + x1)
}
