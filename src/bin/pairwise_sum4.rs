//! Pairwise-tree sum of 4 copies of the operand.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::pairwise_sum::tree_sum_replicated;

fn run() -> DriverResult<()> {
    let [x] = driver::parse_args::<f64, 1>("<value>")?;
    println!("{}", driver::format_f6(tree_sum_replicated(x, 4)));
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
