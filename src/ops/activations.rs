//! GELU activation formulations.
//!
//! Two closed forms of the tanh-approximation GELU, kept side by side in
//! both precision classes for rounding comparison:
//!
//! - **Sigmoid form**: `x / (1 + exp(-2c(x + 0.044715 x^3)))`
//! - **Tanh form**: `0.5 x (1 + tanh(c(x + 0.044715 x^3)))`
//!
//! with `c = sqrt(2/pi)`. The forms are mathematically identical over the
//! reals (`tanh(y) = 2 sigmoid(2y) - 1`), but round differently.
//!
//! # Design
//!
//! The cubic term associates differently in the two forms — left-to-left in
//! the sigmoid form (`0.044715 * x * x * x`), grouped in the tanh form
//! (`0.044715 * (x * x * x)`) — and each kernel preserves its own order.
//! Constants are native-precision literals per class, never narrowed f64
//! values.

// ============================================================================
// Sigmoid-based GELU: x / (1 + exp(-2c(x + 0.044715 x^3)))
// ============================================================================

/// Sigmoid-form GELU, double precision.
#[inline(always)]
pub fn gelu_sigmoid(x: f64) -> f64 {
    const SQRT_2_OVER_PI: f64 = 0.7978845608028654;
    x / (1.0 + (-2.0 * SQRT_2_OVER_PI * (x + 0.044715 * x * x * x)).exp())
}

/// Sigmoid-form GELU, single precision.
#[inline(always)]
pub fn gelu_sigmoid_f32(x: f32) -> f32 {
    const SQRT_2_OVER_PI: f32 = 0.7978845608028654;
    x / (1.0 + (-2.0 * SQRT_2_OVER_PI * (x + 0.044715 * x * x * x)).exp())
}

// ============================================================================
// Tanh-based GELU: 0.5 x (1 + tanh(c(x + 0.044715 x^3)))
// ============================================================================

/// Tanh-form GELU, double precision.
#[inline(always)]
pub fn gelu_tanh(x: f64) -> f64 {
    const SQRT_2_OVER_PI: f64 = 0.7978845608028654;
    0.5 * x * (1.0 + (SQRT_2_OVER_PI * (x + 0.044715 * (x * x * x))).tanh())
}

/// Tanh-form GELU, single precision.
#[inline(always)]
pub fn gelu_tanh_f32(x: f32) -> f32 {
    const SQRT_2_OVER_PI: f32 = 0.7978845608028654;
    0.5 * x * (1.0 + (SQRT_2_OVER_PI * (x + 0.044715 * (x * x * x))).tanh())
}
