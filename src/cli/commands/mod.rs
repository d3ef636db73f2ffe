//! CLI command implementations

pub mod config;
pub mod launch_args;
pub mod seed;
pub mod status;

pub use config::execute as config;
pub use launch_args::execute as launch_args;
pub use seed::execute as seed;
pub use status::execute as status;

use crate::cache::{artifact_path, CacheSeeder, DirAssetSource};
use crate::cli::args::TargetArgs;
use crate::config::Config;
use crate::device::DeviceInfo;
use tracing::debug;

/// Build the seeder and detect the device, CLI flags taking precedence over config
async fn prepare(
    target: &TargetArgs,
    config: &Config,
) -> (CacheSeeder<DirAssetSource>, DeviceInfo) {
    let assets_dir = target
        .assets_dir
        .clone()
        .unwrap_or_else(|| config.cache.assets_dir.clone());
    let data_dir = target
        .data_dir
        .clone()
        .unwrap_or_else(|| config.cache.resolved_data_dir());
    let destination = artifact_path(
        &data_dir,
        &config.cache.cache_subdir,
        &config.cache.artifact_name,
    );
    debug!(
        "Assets: {}, destination: {}",
        assets_dir.display(),
        destination.display()
    );

    let seeder = CacheSeeder::new(
        DirAssetSource::new(assets_dir),
        config.cache.variant_table(),
        config.cache.asset_prefix.clone(),
        destination,
    );

    let identity = target
        .device
        .as_deref()
        .or(config.device.identity.as_deref());
    let device = DeviceInfo::detect(identity).await;

    (seeder, device)
}
