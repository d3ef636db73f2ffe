//! Status command - show variant selection and artifact state

use crate::cache::ArtifactStatus;
use crate::cli::args::{OutputFormat, StatusArgs};
use crate::config::Config;
use crate::error::PsoSeedResult;
use console::{style, Emoji};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "[FAIL] ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[WARN] ");

/// Execute the status command
pub async fn execute(args: StatusArgs, config: &Config) -> PsoSeedResult<()> {
    let (seeder, device) = super::prepare(&args.target, config).await;
    let status = seeder.inspect(&device).await;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
        OutputFormat::Table => print_status(&device.to_string(), &status),
    }

    Ok(())
}

fn print_status(device_info: &str, status: &ArtifactStatus) {
    println!("{}", style("PSO Cache Status").bold().cyan());
    println!();

    println!("{}", style("Device:").bold());
    println!("  Info: {}", device_info);
    println!("  Identity: {}", status.device);
    println!("  Variant: {}", status.variant);

    println!();
    println!("{}", style("Bundle:").bold());
    match &status.source_digest {
        Some(digest) => println!("  {} {} (sha256 {})", CHECK, status.asset, digest),
        None => println!(
            "  {} {} - {}",
            CROSS,
            status.asset,
            style("not readable").red()
        ),
    }

    println!();
    println!("{}", style("Artifact:").bold());
    println!("  Path: {}", status.destination.display());
    if !status.present {
        println!("  {} {}", WARN, style("Not seeded").yellow());
        return;
    }

    let size = status.size.unwrap_or_default();
    match status.matches_source() {
        Some(true) => println!(
            "  {} {} ({} bytes, matches bundle)",
            CHECK,
            style("Present").green(),
            size
        ),
        Some(false) => println!(
            "  {} {} ({} bytes, differs from bundle)",
            WARN,
            style("Present").yellow(),
            size
        ),
        None => println!("  {} {} ({} bytes)", CHECK, style("Present").green(), size),
    }
}
