//! Error measurement in units the formulations are judged by.
//!
//! Comparing two formulations of the same quantity needs a scale-free
//! metric: an absolute difference of 1e-8 is catastrophic near 1e-8 and
//! invisible near 1e8. This module measures in ULPs (units in the last
//! place) and in relative error, plus a decimal-digits-of-agreement view
//! for sampled comparisons.
//!
//! # Design
//!
//! - `ulp_spacing` is the gap from `|x|` to the next float above it, so
//!   `ulp_error(a, b) == 1.0` means adjacent representable values
//! - f32 distances are measured in f32 ULPs but computed in f64 so the
//!   subtraction itself cannot round
//! - exact equality (including equal infinities) is always 0 error;
//!   NaN anywhere yields NaN

/// Gap between `|x|` and the next representable f64 above it.
///
/// `ulp_spacing(0.0)` is the smallest subnormal; NaN and infinities have
/// no spacing and report NaN.
#[inline]
pub fn ulp_spacing(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let a = x.abs();
    if a == f64::MAX {
        // No float above MAX; report the gap below it instead.
        return a - f64::from_bits(a.to_bits() - 1);
    }
    f64::from_bits(a.to_bits() + 1) - a
}

/// Gap between `|x|` and the next representable f32 above it.
#[inline]
pub fn ulp_spacing_f32(x: f32) -> f32 {
    if !x.is_finite() {
        return f32::NAN;
    }
    let a = x.abs();
    if a == f32::MAX {
        return a - f32::from_bits(a.to_bits() - 1);
    }
    f32::from_bits(a.to_bits() + 1) - a
}

/// Distance from `value` to `reference` in f64 ULPs of the reference.
#[inline]
pub fn ulp_error(value: f64, reference: f64) -> f64 {
    if value == reference {
        return 0.0;
    }
    (value - reference).abs() / ulp_spacing(reference)
}

/// Distance from `value` to `reference` in f32 ULPs of the reference.
#[inline]
pub fn ulp_error_f32(value: f32, reference: f32) -> f64 {
    if value == reference {
        return 0.0;
    }
    (value as f64 - reference as f64).abs() / ulp_spacing_f32(reference) as f64
}

/// Relative error of `value` against `reference`.
///
/// A zero reference with a nonzero value reports infinity.
#[inline]
pub fn rel_error(value: f64, reference: f64) -> f64 {
    if value == reference {
        return 0.0;
    }
    (value - reference).abs() / reference.abs()
}

/// Decimal digits of agreement implied by a sample spread.
///
/// `-log10(std_dev / |mean|)`: a spread in the tenth digit of the mean
/// reports roughly 10. Zero spread or a zero mean report infinity, the
/// stochastic-arithmetic harness convention.
pub fn significant_digits(mean: f64, std_dev: f64) -> f64 {
    if mean != 0.0 && std_dev > 0.0 {
        -(std_dev / mean.abs()).log10()
    } else {
        f64::INFINITY
    }
}
