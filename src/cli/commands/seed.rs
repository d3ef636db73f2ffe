//! Seed command - copy the bundled PSO cache on first run

use crate::cache::SeedOutcome;
use crate::cli::args::{OutputFormat, SeedArgs};
use crate::config::Config;
use crate::error::PsoSeedResult;
use console::{style, Emoji};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[WARN] ");

/// Execute the seed command
///
/// Seeding failures are reported but never turn into a failing exit code.
pub async fn execute(args: SeedArgs, config: &Config) -> PsoSeedResult<()> {
    let (seeder, device) = super::prepare(&args.target, config).await;
    let outcome = seeder.seed(&device).await;

    match args.format {
        OutputFormat::Json => {
            let (variant, asset) = seeder.resolve(&device);
            let report = serde_json::json!({
                "device": device.identity(),
                "variant": variant,
                "asset": asset,
                "destination": seeder.destination(),
                "result": outcome,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => match &outcome {
            SeedOutcome::Created { bytes } => println!(
                "{} {} {} ({} bytes)",
                CHECK,
                style("Seeded").green(),
                seeder.destination().display(),
                bytes
            ),
            SeedOutcome::AlreadyPresent => println!(
                "{} {} {}",
                CHECK,
                style("Already present").green(),
                seeder.destination().display()
            ),
            SeedOutcome::FailedNonFatal { reason } => println!(
                "{} {} - {}",
                WARN,
                style("Seeding skipped").yellow(),
                reason
            ),
        },
    }

    Ok(())
}
