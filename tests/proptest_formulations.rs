//! Property-based tests for the kernel formulations.
//!
//! Uses proptest to verify invariants that must hold for all inputs:
//! - Reciprocal sqrt-sum formulation agreement
//! - Guarded-difference branch fidelity
//! - GELU form equivalence
//! - Harmonic mean symmetry
//! - Replicated pairwise summation exactness
//! - Shifted-softmax range and normalization
//! - %.17g round-tripping

use proptest::prelude::*;

use ulp_kernels::accuracy::{rel_error, ulp_error};
use ulp_kernels::driver::format_g17;
use ulp_kernels::ops::activations::{gelu_sigmoid, gelu_tanh};
use ulp_kernels::ops::harmonic::harmonic_mean;
use ulp_kernels::ops::rsqrt::{diff_guarded, pow_recip, sum_recip};
use ulp_kernels::ops::softmax::{softmax3, softmax3_stable};
use ulp_kernels::{flat_sum, kahan_sum, tree_sum_replicated};

// ═══════════════════════════════════════════════════════════════════════
// 1. Reciprocal sqrt-sum: formulations agree for all positive inputs
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// pow(s, -1) and 1/s round the same sum, so the formulations can
    /// never drift past the documented 1e-6 tolerance.
    #[test]
    fn prop_sum_and_pow_formulations_agree(x in 1e-6..1e12f64) {
        let via_div = sum_recip(x);
        let via_pow = pow_recip(x);
        prop_assert!(
            rel_error(via_pow, via_div) <= 1e-6,
            "formulations diverged at x={}: div={:e} pow={:e}",
            x, via_div, via_pow
        );
    }

    /// The guarded difference is algebraically 1/(sqrt(x+1)+sqrt(x)), so
    /// it stays within tolerance of the direct reciprocal on both branches.
    #[test]
    fn prop_guarded_difference_agrees(x in 1e-6..1e12f64) {
        let guarded = diff_guarded(x);
        let reference = sum_recip(x);
        prop_assert!(
            rel_error(guarded, reference) <= 1e-6,
            "guarded form diverged at x={}: guarded={:e} reference={:e}",
            x, guarded, reference
        );
    }

    /// The guarded form returns one of its two branch expressions
    /// bit-for-bit; no input may fall between the branches.
    #[test]
    fn prop_guarded_branch_fidelity(x in 0.0..1e15f64) {
        let result = diff_guarded(x).to_bits();
        let direct = ((x + 1.0).sqrt() - x.sqrt()).to_bits();
        let rewritten = (x.powf(-1.0).sqrt() * 0.5).to_bits();
        prop_assert!(
            result == direct || result == rewritten,
            "diff_guarded({}) matches neither branch expression",
            x
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. GELU: sigmoid and tanh routes compute the same function
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Both routes evaluate x * sigmoid(2 * 0.79788456 * (x + 0.044715 x^3)),
    /// differing only in rounding, so they agree to well under 1e-9.
    #[test]
    fn prop_gelu_forms_agree(x in -20.0..20.0f64) {
        let via_sigmoid = gelu_sigmoid(x);
        let via_tanh = gelu_tanh(x);
        prop_assert!(
            (via_sigmoid - via_tanh).abs() < 1e-9,
            "GELU forms diverged at x={}: sigmoid={:e} tanh={:e}",
            x, via_sigmoid, via_tanh
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Harmonic mean: operand symmetry
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    /// The numerator doubles the first operand, and that doubling is exact
    /// only while it stays finite. With both doublings finite, either
    /// operand order rounds the same real product once, so the swap is
    /// bitwise-identical. Past MAX/2 one order overflows and the other
    /// does not, so operands are kept below that bound.
    #[test]
    fn prop_harmonic_mean_symmetric(
        x in any::<f64>().prop_filter("finite doubling", |v| {
            v.is_finite() && v.abs() <= f64::MAX / 2.0
        }),
        y in any::<f64>().prop_filter("finite doubling", |v| {
            v.is_finite() && v.abs() <= f64::MAX / 2.0
        }),
    ) {
        prop_assert_eq!(
            harmonic_mean(x, y).to_bits(),
            harmonic_mean(y, x).to_bits(),
            "harmonic mean asymmetric at ({}, {})", x, y
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Summation: replicated tree sums are exact, short sums are order-free
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    /// Pairwise-summing 2^k copies of v only ever adds equal partials,
    /// and doubling is exact, so the result is exactly v * 2^k.
    #[test]
    fn prop_tree_sum_replicated_exact(v in -1e3..1e3f64, k in 1..=5u32) {
        let n = 1usize << k;
        let total = tree_sum_replicated(v, n);
        let expected = v * n as f64;
        prop_assert_eq!(
            total.to_bits(),
            expected.to_bits(),
            "replicated sum of {} copies of {} was {:e}, want {:e}",
            n, v, total, expected
        );
    }

    /// With at most two addends there is nothing to compensate: the Kahan
    /// route performs the identical single addition as the naive fold.
    #[test]
    fn prop_kahan_matches_flat_for_two_terms(a in -1e12..1e12f64, b in -1e12..1e12f64) {
        let values = [a, b];
        prop_assert_eq!(
            kahan_sum(&values).to_bits(),
            flat_sum(&values).to_bits(),
            "two-term sums disagree for ({}, {})", a, b
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Shifted softmax: range, normalization, moderate-logit agreement
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// After the max shift every exponent is <= 0 and the denominator
    /// is at least 1, so the result is always a probability.
    #[test]
    fn prop_stable_softmax_is_probability(
        x0 in -1e4..1e4f64,
        x1 in -1e4..1e4f64,
        x2 in -1e4..1e4f64,
    ) {
        let y0 = softmax3_stable(x0, x1, x2);
        prop_assert!(
            y0.is_finite() && (0.0..=1.0).contains(&y0),
            "softmax3_stable({}, {}, {}) = {:e} is not a probability",
            x0, x1, x2, y0
        );
    }

    /// Rotating the first-class probe through all three classes must
    /// recover the full probability mass.
    #[test]
    fn prop_stable_softmax_normalizes(
        x0 in -50.0..50.0f64,
        x1 in -50.0..50.0f64,
        x2 in -50.0..50.0f64,
    ) {
        let mass = softmax3_stable(x0, x1, x2)
            + softmax3_stable(x1, x2, x0)
            + softmax3_stable(x2, x0, x1);
        prop_assert!(
            (mass - 1.0).abs() < 1e-12,
            "probability mass {} for logits ({}, {}, {})",
            mass, x0, x1, x2
        );
    }

    /// On moderate logits the naive form has no overflow to fear and
    /// must agree with the shifted form almost to full precision.
    #[test]
    fn prop_naive_matches_stable_on_moderate_logits(
        x0 in -30.0..30.0f64,
        x1 in -30.0..30.0f64,
        x2 in -30.0..30.0f64,
    ) {
        let naive = softmax3(x0, x1, x2);
        let stable = softmax3_stable(x0, x1, x2);
        prop_assert!(
            rel_error(naive, stable) < 1e-12,
            "softmax forms diverged at ({}, {}, {}): naive={:e} stable={:e}",
            x0, x1, x2, naive, stable
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Formatting: %.17g output round-trips every finite double
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    /// 17 significant digits identify a double uniquely, so parsing the
    /// rendered string must recover the original bits.
    #[test]
    fn prop_g17_round_trips(x in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let rendered = format_g17(x);
        let parsed: f64 = rendered.parse().unwrap_or(f64::NAN);
        prop_assert_eq!(
            parsed.to_bits(),
            x.to_bits(),
            "{} rendered as '{}' parsed back to {}",
            x, rendered, parsed
        );
    }

    /// Error measurement is reflexive: a value is zero ULPs from itself.
    #[test]
    fn prop_ulp_error_reflexive(x in any::<f64>().prop_filter("not nan", |v| !v.is_nan())) {
        prop_assert_eq!(ulp_error(x, x), 0.0, "ulp_error({}, {}) != 0", x, x);
    }
}
