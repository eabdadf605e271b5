//! Naive first-class softmax probe, double precision.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::softmax::softmax3;

fn run() -> DriverResult<()> {
    let [x0, x1, x2] = driver::parse_args::<f64, 3>("<x0> <x1> <x2>")?;
    let y0 = softmax3(x0, x1, x2);
    println!(
        "softmax({}, {}, {}) = {}",
        driver::format_g6(x0),
        driver::format_g6(x1),
        driver::format_g6(x2),
        driver::format_g6(y0)
    );
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
