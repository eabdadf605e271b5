//! Single-precision reciprocal sqrt-sum probe, debug-format transcript.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::rsqrt::sum_recip_f32;

fn run() -> DriverResult<()> {
    let [x] = driver::parse_args::<f32, 1>("<value>")?;
    let result = sum_recip_f32(x);
    println!(
        "x = {}, sum_recip(x) = {}",
        driver::format_e17(x as f64),
        driver::format_e17(result as f64)
    );
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
