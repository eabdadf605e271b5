//! Pairwise (tree-order) summation.
//!
//! `tree_sum` reduces a power-of-two-length buffer with a balanced binary
//! tree: level 1 adds each odd element into its even neighbor, level 2 adds
//! element `i + 2` into element `i` for `i` divisible by 4, and so on until
//! one partial remains. Every level finishes before the next begins, so the
//! rounding of each intermediate is fully determined by the tree shape.
//!
//! Tree order keeps the two operands of every addition at similar magnitude
//! when the inputs are, which is why summing n copies of `x` this way equals
//! `x * n` exactly whenever `n` is a power of two: each level doubles, and
//! doubling only bumps the exponent. A left-to-right fold over the same data
//! accumulates a rounding error per step instead; `flat_sum` provides that
//! order as the comparison baseline.

use crate::kernel_types::KernelFloat;

/// Reduce `values` in place with the pairwise tree and return the total.
///
/// Level with stride `s` (s = 1, 2, 4, ...) adds element `i + s` into
/// element `i` for every `i` divisible by `2s`. The slice is clobbered:
/// on return, element 0 holds the total and the rest hold partials.
///
/// # Panics
///
/// Panics if `values` is empty or its length is not a power of two.
pub fn tree_sum<T: KernelFloat>(values: &mut [T]) -> T {
    assert!(
        !values.is_empty() && values.len().is_power_of_two(),
        "tree_sum requires a power-of-two length, got {}",
        values.len()
    );

    let mut stride = 1;
    while stride < values.len() {
        let mut i = 0;
        while i < values.len() {
            let rhs = values[i + stride];
            values[i] = values[i] + rhs;
            i += 2 * stride;
        }
        stride *= 2;
    }
    values[0]
}

/// Tree-sum `n` copies of `value` without materializing the caller's buffer.
///
/// With `n` a power of two the result is exactly `value * n`: every level
/// of the tree adds two equal partials, and `x + x` is always exact.
///
/// # Panics
///
/// Panics if `n` is zero or not a power of two.
pub fn tree_sum_replicated<T: KernelFloat>(value: T, n: usize) -> T {
    let mut buf = vec![value; n];
    tree_sum(&mut buf)
}

/// Left-to-right sequential fold over `values`.
///
/// This is the naive accumulation order; it rounds once per element and
/// drifts on data like repeated `0.1`. Kept as the baseline the tree order
/// is measured against.
pub fn flat_sum<T: KernelFloat>(values: &[T]) -> T {
    let mut acc = T::zero();
    for &v in values {
        acc = acc + v;
    }
    acc
}
