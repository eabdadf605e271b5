pub mod accumulate;
pub mod activations;
pub mod harmonic;
pub mod pairwise_sum;
pub mod rsqrt;
pub mod softmax;

pub use accumulate::{kahan_sum, KahanAccumulator};
pub use pairwise_sum::{flat_sum, tree_sum, tree_sum_replicated};
