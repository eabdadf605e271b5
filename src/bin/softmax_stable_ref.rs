//! Stdin-driven reference run of the max-shifted softmax probe.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::softmax::softmax3_stable;

fn run() -> DriverResult<()> {
    let [x0, x1, x2] = driver::read_stdin_values::<f64, 3>()?;
    println!("{}", driver::format_g17(softmax3_stable(x0, x1, x2)));
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
