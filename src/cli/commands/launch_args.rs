//! Launch-args command - inject the worker count flag

use crate::cli::args::LaunchArgsArgs;
use crate::config::Config;
use crate::error::PsoSeedResult;
use crate::launch::LaunchArgs;

/// Execute the launch-args command
pub async fn execute(args: LaunchArgsArgs, config: &Config) -> PsoSeedResult<()> {
    let launch = LaunchArgs::from_config(&config.launch);
    println!("{}", launch.inject(args.cmd_line.as_deref()));
    Ok(())
}
