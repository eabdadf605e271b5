//! Stdin-driven reference run of the naive softmax probe.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::softmax::softmax3;

fn run() -> DriverResult<()> {
    let [x0, x1, x2] = driver::read_stdin_values::<f64, 3>()?;
    println!("{}", driver::format_g17(softmax3(x0, x1, x2)));
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
