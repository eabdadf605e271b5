//! Three-class softmax probes, naive and max-shifted.
//!
//! Each probe returns the probability of the *first* class only; the
//! denominator still normalizes over all three logits. The naive form
//! exponentiates the logits directly, so any logit past the overflow
//! threshold of its precision class (~709 for f64, ~88 for f32) turns the
//! denominator infinite and the winning class into `inf / inf`, which is
//! NaN. The stable form subtracts the running maximum first; the largest
//! shifted logit is then exactly zero and the denominator lives in
//! `[1, 3]`, out of reach of overflow for any finite input.
//!
//! `log_add_exp` and `log_sum_exp` are the log-space relatives of the same
//! max-shift trick, kept for checking the stable denominator independently.

use crate::ops::accumulate::KahanAccumulator;

/// Naive softmax probability of the first class, f64 logits.
///
/// Denominator is `exp(x0) + exp(x1) + exp(x2)`, summed left to right
/// with no shift. Overflows to NaN for a large winning logit; see
/// [`softmax3_stable`].
#[inline(always)]
pub fn softmax3(x0: f64, x1: f64, x2: f64) -> f64 {
    let e0 = x0.exp();
    let e1 = x1.exp();
    let e2 = x2.exp();
    e0 / (e0 + e1 + e2)
}

/// Naive softmax probability of the first class, f32 logits.
///
/// Same formulation as [`softmax3`] with every operation rounded to f32;
/// the overflow threshold drops to `exp(~88.7)`.
#[inline(always)]
pub fn softmax3_f32(x0: f32, x1: f32, x2: f32) -> f32 {
    let e0 = x0.exp();
    let e1 = x1.exp();
    let e2 = x2.exp();
    e0 / (e0 + e1 + e2)
}

/// Max-shifted softmax probability of the first class, f64 logits.
///
/// Subtracts `m = max(x0, max(x1, x2))` before exponentiating. The
/// largest shifted logit is exactly 0, so the denominator is between 1
/// and 3 and the result is finite for any finite input.
#[inline(always)]
pub fn softmax3_stable(x0: f64, x1: f64, x2: f64) -> f64 {
    let m = x0.max(x1.max(x2));
    let e0 = (x0 - m).exp();
    let e1 = (x1 - m).exp();
    let e2 = (x2 - m).exp();
    e0 / (e0 + e1 + e2)
}

/// Max-shifted softmax probability of the first class, f32 logits.
#[inline(always)]
pub fn softmax3_stable_f32(x0: f32, x1: f32, x2: f32) -> f32 {
    let m = x0.max(x1.max(x2));
    let e0 = (x0 - m).exp();
    let e1 = (x1 - m).exp();
    let e2 = (x2 - m).exp();
    e0 / (e0 + e1 + e2)
}

/// Compute log(exp(a) + exp(b)) without overflowing either exponential.
#[inline]
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    if a.is_infinite() && a.is_sign_negative() {
        return b;
    }
    if b.is_infinite() && b.is_sign_negative() {
        return a;
    }

    let max = a.max(b);
    let min = a.min(b);

    max + (1.0 + (min - max).exp()).ln()
}

/// Compute log(sum(exp(x))) with the max shifted out.
#[inline]
pub fn log_sum_exp(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NEG_INFINITY;
    }

    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if max.is_infinite() {
        return max;
    }

    let sum: f64 = values.iter().map(|&x| (x - max).exp()).sum();

    max + sum.ln()
}

/// Compute log(sum(exp(x))) with Kahan compensation on the exp sum.
pub fn log_sum_exp_kahan(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NEG_INFINITY;
    }

    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if max.is_infinite() {
        return max;
    }

    let mut sum = KahanAccumulator::<f64>::new();
    for &x in values {
        sum.add((x - max).exp());
    }

    max + sum.value().ln()
}
