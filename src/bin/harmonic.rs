//! Harmonic mean of two operands, double precision.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::harmonic::harmonic_mean;

fn run() -> DriverResult<()> {
    let [x0, x1] = driver::parse_args::<f64, 2>("<value1> <value2>")?;
    println!("{}", driver::format_e17(harmonic_mean(x0, x1)));
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
