//! Fused multiply-add formulation probe, debug-format transcript.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::rsqrt::fma_form;

fn run() -> DriverResult<()> {
    let [x] = driver::parse_args::<f64, 1>("<value>")?;
    let result = fma_form(x);
    println!(
        "x = {}, fma_form(x) = {}",
        driver::format_e17(x),
        driver::format_e17(result)
    );
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
