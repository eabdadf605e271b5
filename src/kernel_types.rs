//! Precision-class types shared across kernels and drivers.

/// Float type identifier for the two precision classes of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatType {
    F32,
    F64,
}

impl FloatType {
    /// Mantissa width in bits, including the implicit leading bit.
    #[inline(always)]
    pub const fn mantissa_digits(self) -> u32 {
        match self {
            FloatType::F32 => 24,
            FloatType::F64 => 53,
        }
    }
}

/// Trait for kernel-compatible floating point types.
///
/// Implemented for `f32` and `f64` only. Every math method computes in the
/// native precision of the implementing type; the per-class rounding is the
/// quantity under study, so nothing here widens before operating.
/// `to_f64` exists for printing (C varargs promote floats to double) and
/// for test-side comparisons.
pub trait KernelFloat:
    Copy
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
{
    /// Compile-time precision-class identifier.
    const TYPE_ID: FloatType;

    fn zero() -> Self;
    fn one() -> Self;
    /// Round an f64 into this class. Used for literals that are exactly
    /// representable (integers, powers of two) and for test scaffolding;
    /// kernels with decimal constants use concrete per-class functions
    /// instead.
    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
    /// Parse decimal/exponential float text, `inf` and `NaN` included.
    fn parse(s: &str) -> Option<Self>;
    fn sqrt(self) -> Self;
    fn exp(self) -> Self;
    fn tanh(self) -> Self;
    fn powf(self, n: Self) -> Self;
    /// Fused multiply-add: `self * a + b` with a single rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;
}

impl KernelFloat for f32 {
    const TYPE_ID: FloatType = FloatType::F32;

    #[inline(always)]
    fn zero() -> Self { 0.0 }
    #[inline(always)]
    fn one() -> Self { 1.0 }
    #[inline(always)]
    fn from_f64(v: f64) -> Self { v as f32 }
    #[inline(always)]
    fn to_f64(self) -> f64 { f64::from(self) }
    #[inline(always)]
    fn parse(s: &str) -> Option<Self> { s.parse::<f32>().ok() }
    #[inline(always)]
    fn sqrt(self) -> Self { f32::sqrt(self) }
    #[inline(always)]
    fn exp(self) -> Self { f32::exp(self) }
    #[inline(always)]
    fn tanh(self) -> Self { f32::tanh(self) }
    #[inline(always)]
    fn powf(self, n: Self) -> Self { f32::powf(self, n) }
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self { f32::mul_add(self, a, b) }
    #[inline(always)]
    fn max(self, other: Self) -> Self { f32::max(self, other) }
    #[inline(always)]
    fn abs(self) -> Self { f32::abs(self) }
    #[inline(always)]
    fn is_finite(self) -> bool { f32::is_finite(self) }
    #[inline(always)]
    fn is_nan(self) -> bool { f32::is_nan(self) }
}

impl KernelFloat for f64 {
    const TYPE_ID: FloatType = FloatType::F64;

    #[inline(always)]
    fn zero() -> Self { 0.0 }
    #[inline(always)]
    fn one() -> Self { 1.0 }
    #[inline(always)]
    fn from_f64(v: f64) -> Self { v }
    #[inline(always)]
    fn to_f64(self) -> f64 { self }
    #[inline(always)]
    fn parse(s: &str) -> Option<Self> { s.parse::<f64>().ok() }
    #[inline(always)]
    fn sqrt(self) -> Self { f64::sqrt(self) }
    #[inline(always)]
    fn exp(self) -> Self { f64::exp(self) }
    #[inline(always)]
    fn tanh(self) -> Self { f64::tanh(self) }
    #[inline(always)]
    fn powf(self, n: Self) -> Self { f64::powf(self, n) }
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self { f64::mul_add(self, a, b) }
    #[inline(always)]
    fn max(self, other: Self) -> Self { f64::max(self, other) }
    #[inline(always)]
    fn abs(self) -> Self { f64::abs(self) }
    #[inline(always)]
    fn is_finite(self) -> bool { f64::is_finite(self) }
    #[inline(always)]
    fn is_nan(self) -> bool { f64::is_nan(self) }
}
