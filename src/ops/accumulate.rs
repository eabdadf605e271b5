//! Compensated sequential accumulation.
//!
//! Kahan summation tracks a compensation term `c` holding the low-order bits
//! lost by each addition and feeds them back into the next one, reducing the
//! accumulated rounding error of a long fold from O(n) to O(1). It is the
//! sequential-order counterweight to the tree order in `pairwise_sum`: same
//! left-to-right visit, nearly none of the drift.

use crate::kernel_types::KernelFloat;

/// Kahan compensated accumulator.
#[derive(Debug, Clone, Copy)]
pub struct KahanAccumulator<T> {
    sum: T,
    /// Compensation term for lost low-order bits.
    c: T,
}

impl<T: KernelFloat> Default for KahanAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: KernelFloat> KahanAccumulator<T> {
    /// Create a new accumulator initialized to zero.
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            c: T::zero(),
        }
    }

    /// Create an accumulator seeded with an initial value.
    pub fn with_value(value: T) -> Self {
        Self {
            sum: value,
            c: T::zero(),
        }
    }

    /// Add a value with compensation.
    #[inline]
    pub fn add(&mut self, x: T) {
        let y = x - self.c; // Re-inject the bits lost last time
        let t = self.sum + y; // New sum, low bits of y lost
        self.c = (t - self.sum) - y; // What was actually lost
        self.sum = t;
    }

    /// Get the accumulated value.
    #[inline]
    pub fn value(&self) -> T {
        self.sum
    }

    /// Get the sum with the outstanding compensation applied.
    #[inline]
    pub fn corrected_value(&self) -> T {
        self.sum - self.c
    }

    /// Reset the accumulator to zero.
    pub fn reset(&mut self) {
        self.sum = T::zero();
        self.c = T::zero();
    }
}

/// Kahan-sum a slice in one call.
pub fn kahan_sum<T: KernelFloat>(values: &[T]) -> T {
    let mut acc = KahanAccumulator::new();
    for &v in values {
        acc.add(v);
    }
    acc.value()
}
