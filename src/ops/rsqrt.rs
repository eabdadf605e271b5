//! Reciprocal-sqrt-sum formulation family.
//!
//! Alternative ways of evaluating expressions built from `sqrt(x)` and
//! `sqrt(x + 1)`, kept as separately named kernels so their rounding
//! behavior can be compared:
//!
//! - **Sum form**: `1 / (sqrt(x) + sqrt(1 + x))` — the direct reciprocal.
//! - **Guarded difference form**: `sqrt(x + 1) - sqrt(x)` with a cancellation
//!   guard; algebraically equal to the sum form over the reals.
//! - **Pow form**: the sum form with the reciprocal taken through `powf`.
//! - **FMA form**: `fma(0.5, x, 1 - sqrt(x))` — an unrelated expression
//!   offered only as an accuracy-comparison alternative.
//!
//! Evaluation order and the `4e-5` guard threshold are part of each kernel's
//! definition; do not re-associate or "simplify" them.

/// Reciprocal of the sum of square roots: `1 / (sqrt(x) + sqrt(1 + x))`.
#[inline(always)]
pub fn sum_recip(x: f64) -> f64 {
    1.0 / (x.sqrt() + (1.0 + x).sqrt())
}

/// Single-precision [`sum_recip`].
#[inline(always)]
pub fn sum_recip_f32(x: f32) -> f32 {
    1.0 / (x.sqrt() + (1.0 + x).sqrt())
}

/// Square-root difference `sqrt(x + 1) - sqrt(x)` with a cancellation guard.
///
/// For large `x` the direct subtraction cancels catastrophically; once the
/// difference drops to the `4e-5` threshold the kernel switches to the
/// large-`x` limit `sqrt(1/x) * 0.5`. The guard branch computes a
/// mathematically *near-equal* quantity, not the same closed form, so the
/// two branches may legitimately diverge around the cutover.
#[inline(always)]
pub fn diff_guarded(x: f64) -> f64 {
    let t0 = (x + 1.0).sqrt() - x.sqrt();
    if t0 <= 4e-5 {
        x.powf(-1.0).sqrt() * 0.5
    } else {
        t0
    }
}

/// Single-precision [`diff_guarded`]; the threshold literal is the f32
/// rounding of `4e-5`.
#[inline(always)]
pub fn diff_guarded_f32(x: f32) -> f32 {
    let t0 = (x + 1.0).sqrt() - x.sqrt();
    if t0 <= 4e-5 {
        x.powf(-1.0).sqrt() * 0.5
    } else {
        t0
    }
}

/// Sum form with the reciprocal taken through `powf(.., -1)`.
///
/// Same closed form as [`sum_recip`]; only the final primitive differs.
#[inline(always)]
pub fn pow_recip(x: f64) -> f64 {
    (x.sqrt() + (1.0 + x).sqrt()).powf(-1.0)
}

/// Single-precision [`pow_recip`].
#[inline(always)]
pub fn pow_recip_f32(x: f32) -> f32 {
    (x.sqrt() + (1.0 + x).sqrt()).powf(-1.0)
}

/// Fused multiply-add form: `0.5 * x + (1 - sqrt(x))` in a single rounding.
///
/// Not claimed equivalent to the other formulations. Double precision only.
#[inline(always)]
pub fn fma_form(x: f64) -> f64 {
    0.5f64.mul_add(x, 1.0 - x.sqrt())
}
