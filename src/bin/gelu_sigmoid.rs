//! Sigmoid-form GELU, double precision.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::activations::gelu_sigmoid;

fn run() -> DriverResult<()> {
    let [x] = driver::parse_args::<f64, 1>("<value>")?;
    println!("{}", driver::format_e17(gelu_sigmoid(x)));
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
