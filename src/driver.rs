//! Shared plumbing for the kernel driver binaries.
//!
//! Every binary in `src/bin/` is a thin wrapper around one kernel: read the
//! operands (argv or whole-of-stdin), evaluate, print one line. This module
//! owns the two halves every driver shares.
//!
//! # Design
//!
//! - Operand parsing is strict: a malformed token is a reported error and
//!   exit code 1, never a silent zero
//! - Output rendering matches C printf conventions (`%.17e`, `%f`, `%g`)
//!   so transcripts diff cleanly against runs of the same kernels from
//!   other toolchains: two-digit signed exponents, `%g` style switching
//!   with trailing-zero stripping, lowercase `inf`/`nan`
//! - f32 drivers widen to f64 before rendering, the same promotion C
//!   varargs apply

use std::io::Read;
use std::process::ExitCode;

use thiserror::Error;

use crate::kernel_types::KernelFloat;

/// Errors a driver binary can exit with.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Wrong operand count on the command line.
    #[error("Usage: {program} {operands}")]
    Usage {
        program: String,
        operands: &'static str,
    },
    /// An operand that does not parse as a float in full.
    #[error("invalid operand '{token}': expected a floating-point value")]
    Parse { token: String },
    /// Stdin ended before all expected operands were read.
    #[error("expected {expected} whitespace-separated values on stdin, got {found}")]
    MissingInput { expected: usize, found: usize },
    /// Stdin could not be read at all.
    #[error("failed to read stdin: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for driver plumbing.
pub type DriverResult<T> = Result<T, DriverError>;

/// Read exactly `N` operands from the command line.
///
/// `operands` is the usage hint printed when the count is wrong, e.g.
/// `"<x0> <x1>"`.
pub fn parse_args<T, const N: usize>(operands: &'static str) -> DriverResult<[T; N]>
where
    T: KernelFloat,
{
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "kernel".to_string());
    let rest: Vec<String> = args.collect();

    if rest.len() != N {
        return Err(DriverError::Usage { program, operands });
    }

    let mut values = [T::zero(); N];
    for (slot, token) in values.iter_mut().zip(&rest) {
        *slot = parse_token(token)?;
    }
    Ok(values)
}

/// Read the first `N` whitespace-separated operands from stdin.
///
/// Trailing tokens are ignored, matching scanf-style readers that stop
/// after the operands they asked for.
pub fn read_stdin_values<T, const N: usize>() -> DriverResult<[T; N]>
where
    T: KernelFloat,
{
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    parse_values(&input)
}

/// Parse the first `N` whitespace-separated floats out of `input`.
pub fn parse_values<T, const N: usize>(input: &str) -> DriverResult<[T; N]>
where
    T: KernelFloat,
{
    let mut values = [T::zero(); N];
    let mut tokens = input.split_whitespace();
    for (found, slot) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or(DriverError::MissingInput {
            expected: N,
            found,
        })?;
        *slot = parse_token(token)?;
    }
    Ok(values)
}

fn parse_token<T: KernelFloat>(token: &str) -> DriverResult<T> {
    T::parse(token).ok_or_else(|| DriverError::Parse {
        token: token.to_string(),
    })
}

/// Map a driver result onto the process exit code, reporting any error
/// on stderr.
pub fn exit_code(result: DriverResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// Output rendering
// ============================================================================

fn sign_split(value: f64) -> (&'static str, f64) {
    if value.is_sign_negative() {
        ("-", -value)
    } else {
        ("", value)
    }
}

fn split_exponent(formatted: &str) -> (&str, i32) {
    match formatted.split_once('e') {
        Some((mantissa, exp)) => (
            mantissa,
            exp.parse().expect("`{:e}` output carries a decimal exponent"),
        ),
        None => (formatted, 0),
    }
}

fn render_exponent(exp: i32) -> String {
    format!("e{}{:02}", if exp < 0 { '-' } else { '+' }, exp.abs())
}

fn trim_trailing_zeros(digits: &str) -> &str {
    if !digits.contains('.') {
        return digits;
    }
    let trimmed = digits.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

/// Scientific notation with `precision` digits after the point and a
/// signed, at-least-two-digit exponent: `4.00000000000000000e+00`.
pub fn format_e(value: f64, precision: usize) -> String {
    let (sign, magnitude) = sign_split(value);
    if magnitude.is_nan() {
        return format!("{sign}nan");
    }
    if magnitude.is_infinite() {
        return format!("{sign}inf");
    }

    let formatted = format!("{:.*e}", precision, magnitude);
    let (mantissa, exp) = split_exponent(&formatted);
    format!("{sign}{mantissa}{}", render_exponent(exp))
}

/// Fixed notation with `precision` digits after the point.
pub fn format_fixed(value: f64, precision: usize) -> String {
    let (sign, magnitude) = sign_split(value);
    if magnitude.is_nan() {
        return format!("{sign}nan");
    }
    if magnitude.is_infinite() {
        return format!("{sign}inf");
    }
    format!("{sign}{:.*}", precision, magnitude)
}

/// General notation with `precision` significant digits.
///
/// Picks fixed or scientific style from the decimal exponent after
/// rounding (scientific when it is below -4 or at least `precision`),
/// then strips trailing fractional zeros.
pub fn format_general(value: f64, precision: usize) -> String {
    let p = precision.max(1);
    let (sign, magnitude) = sign_split(value);
    if magnitude.is_nan() {
        return format!("{sign}nan");
    }
    if magnitude.is_infinite() {
        return format!("{sign}inf");
    }

    // The exponent must come from the value as rounded to p significant
    // digits; rounding can carry it up, e.g. 999999.5 at p = 6 is 1e+06.
    let tentative = format!("{:.*e}", p - 1, magnitude);
    let (mantissa, exp) = split_exponent(&tentative);

    if exp >= -4 && exp < p as i32 {
        let fixed = format!("{:.*}", (p as i32 - 1 - exp) as usize, magnitude);
        format!("{sign}{}", trim_trailing_zeros(&fixed))
    } else {
        format!("{sign}{}{}", trim_trailing_zeros(mantissa), render_exponent(exp))
    }
}

/// `%.17e` equivalent, the full-fidelity debug rendering.
#[inline]
pub fn format_e17(value: f64) -> String {
    format_e(value, 17)
}

/// `%f` equivalent.
#[inline]
pub fn format_f6(value: f64) -> String {
    format_fixed(value, 6)
}

/// `%g` equivalent.
#[inline]
pub fn format_g6(value: f64) -> String {
    format_general(value, 6)
}

/// `%.17g` equivalent, round-trippable for f64.
#[inline]
pub fn format_g17(value: f64) -> String {
    format_general(value, 17)
}
