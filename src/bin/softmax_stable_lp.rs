//! Max-shifted first-class softmax probe, single precision.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::softmax::softmax3_stable_f32;

fn run() -> DriverResult<()> {
    let [x0, x1, x2] = driver::parse_args::<f32, 3>("<x0> <x1> <x2>")?;
    let y0 = softmax3_stable_f32(x0, x1, x2);
    println!(
        "stable_softmax({}, {}, {}) = {}",
        driver::format_g6(x0 as f64),
        driver::format_g6(x1 as f64),
        driver::format_g6(x2 as f64),
        driver::format_g6(y0 as f64)
    );
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
