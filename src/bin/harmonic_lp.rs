//! Harmonic mean of two operands, single precision.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::harmonic::harmonic_mean_f32;

fn run() -> DriverResult<()> {
    let [x0, x1] = driver::parse_args::<f32, 2>("<value1> <value2>")?;
    println!("{}", driver::format_e17(harmonic_mean_f32(x0, x1) as f64));
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
