//! ulp-kernels: scalar floating-point kernels that exist in several
//! algebraically related formulations, kept in their exact evaluation
//! orders so their rounding behavior can be measured and compared.
//!
//! The catalogue:
//! - **Reciprocal sqrt-sum** (`ops::rsqrt`): direct, pow-based,
//!   cancellation-guarded and fma formulations around `sqrt(x)` and
//!   `sqrt(1 + x)`
//! - **GELU** (`ops::activations`): sigmoid and tanh closed forms of the
//!   same activation
//! - **Harmonic mean** (`ops::harmonic`) of a pair
//! - **Summation orders** (`ops::pairwise_sum`, `ops::accumulate`):
//!   pairwise tree, sequential fold and Kahan compensation
//! - **Three-class softmax** (`ops::softmax`): naive and max-shifted
//!   probes of the first class
//!
//! Kernels come in f64 and f32 precision classes evaluated natively in
//! each class; constants are per-class literals so nothing double-rounds
//! through f64. The `accuracy` module measures results in ULPs, and each
//! binary under `src/bin/` wraps one kernel in a one-line command-line
//! driver with printf-compatible output.
//!
//! # Quick Start
//!
//! ```ignore
//! use ulp_kernels::{softmax3, softmax3_stable, ulp_error};
//!
//! let naive = softmax3(12.0, 0.5, -3.0);
//! let stable = softmax3_stable(12.0, 0.5, -3.0);
//! assert!(ulp_error(naive, stable) < 4.0);
//! ```

pub mod accuracy;
pub mod driver;
pub mod kernel_types;
pub mod ops;

pub use kernel_types::{FloatType, KernelFloat};

// Formulation kernel exports
pub use ops::activations::{gelu_sigmoid, gelu_sigmoid_f32, gelu_tanh, gelu_tanh_f32};
pub use ops::harmonic::{harmonic_mean, harmonic_mean_f32};
pub use ops::rsqrt::{
    diff_guarded, diff_guarded_f32, fma_form, pow_recip, pow_recip_f32, sum_recip, sum_recip_f32,
};
pub use ops::softmax::{
    log_add_exp, log_sum_exp, log_sum_exp_kahan, softmax3, softmax3_f32, softmax3_stable,
    softmax3_stable_f32,
};

// Summation order exports
pub use ops::accumulate::{kahan_sum, KahanAccumulator};
pub use ops::pairwise_sum::{flat_sum, tree_sum, tree_sum_replicated};

// Error measurement exports
pub use accuracy::{
    rel_error, significant_digits, ulp_error, ulp_error_f32, ulp_spacing, ulp_spacing_f32,
};
