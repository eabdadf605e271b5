//! Stdin-driven reference run of the 16-copy pairwise-tree sum.

use std::process::ExitCode;

use ulp_kernels::driver::{self, DriverResult};
use ulp_kernels::ops::pairwise_sum::tree_sum_replicated;

fn run() -> DriverResult<()> {
    let [x] = driver::read_stdin_values::<f64, 1>()?;
    println!("{}", driver::format_e17(tree_sum_replicated(x, 16)));
    Ok(())
}

fn main() -> ExitCode {
    driver::exit_code(run())
}
