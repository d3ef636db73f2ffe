//! Configuration schema for psoseed
//!
//! Configuration is stored at `~/.config/psoseed/config.toml`

use crate::cache::variant::{VariantRule, VariantTable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Launch command-line settings
    pub launch: LaunchConfig,

    /// Device identity settings
    pub device: DeviceConfig,

    /// PSO cache seeding settings
    pub cache: CacheConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Launch argument injection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Flag appended to the host command line
    pub flag: String,

    /// Worker count passed with the flag
    pub worker_count: u32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            flag: "-job-worker-count".to_string(),
            worker_count: 4,
        }
    }
}

/// Device identity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Fixed identity instead of asking the platform
    pub identity: Option<String>,
}

/// PSO cache seeding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding the bundled cache variants
    pub assets_dir: PathBuf,

    /// Persistent app data directory (default: platform data dir)
    pub data_dir: Option<PathBuf>,

    /// Subdirectory of the data directory holding the artifact
    pub cache_subdir: String,

    /// File name of the seeded artifact
    pub artifact_name: String,

    /// Prefix of bundled asset names (`<prefix>_<variant>.bin`)
    pub asset_prefix: String,

    /// Device rules, first match wins
    pub variants: Vec<VariantRule>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            data_dir: None,
            cache_subdir: "cache".to_string(),
            artifact_name: "vulkan_pso_cache.bin".to_string(),
            asset_prefix: "artifact".to_string(),
            variants: VariantTable::builtin_rules(),
        }
    }
}

impl CacheConfig {
    /// Data directory, falling back to the platform data dir
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("psoseed")
        })
    }

    /// Variant table built from the configured rules
    pub fn variant_table(&self) -> VariantTable {
        VariantTable::new(self.variants.clone())
    }
}
