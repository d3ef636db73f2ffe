//! psoseed - Vulkan PSO cache seeding
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use psoseed::cli::args::ConfigAction;
use psoseed::cli::{Cli, Commands};
use psoseed::config::{Config, ConfigManager};
use psoseed::error::PsoSeedResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> PsoSeedResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    // config init must work even when the existing file is broken
    let config = match &cli.command {
        Commands::Config(args) if matches!(args.action, Some(ConfigAction::Init { .. })) => {
            Config::default()
        }
        _ => config_manager.load().await?,
    };

    init_logging(cli.verbose, &config.general.log_format);

    match cli.command {
        Commands::Seed(args) => psoseed::cli::commands::seed(args, &config).await,
        Commands::LaunchArgs(args) => psoseed::cli::commands::launch_args(args, &config).await,
        Commands::Status(args) => psoseed::cli::commands::status(args, &config).await,
        Commands::Config(args) => {
            psoseed::cli::commands::config(args, &config, &config_manager).await
        }
    }
}

/// 0 = warn, 1 = info, 2+ = debug; logs go to stderr
fn init_logging(verbose: u8, log_format: &str) {
    let filter = match verbose {
        0 => EnvFilter::new("psoseed=warn"),
        1 => EnvFilter::new("psoseed=info"),
        _ => EnvFilter::new("psoseed=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
