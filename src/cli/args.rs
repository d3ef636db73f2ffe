//! CLI argument definitions using clap derive

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// psoseed - Vulkan PSO cache seeding
///
/// Copies the bundled pipeline cache variant for this device into the
/// app data directory on first run.
#[derive(Parser, Debug)]
#[command(name = "psoseed")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PSOSEED_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed the PSO cache if it is not already present
    Seed(SeedArgs),

    /// Print a command line with the worker count flag injected
    LaunchArgs(LaunchArgsArgs),

    /// Show the selected variant and the artifact state
    Status(StatusArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Where to read the bundle, where to write, and which device to assume
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Directory holding the bundled cache variants
    #[arg(long, env = "PSOSEED_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Persistent app data directory
    #[arg(long, env = "PSOSEED_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Device identity (skips platform detection)
    #[arg(long, env = "PSOSEED_DEVICE")]
    pub device: Option<String>,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the launch-args command
#[derive(Parser, Debug)]
pub struct LaunchArgsArgs {
    /// Current command line (absent is treated as empty)
    #[arg(allow_hyphen_values = true)]
    pub cmd_line: Option<String>,
}

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for report commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}
