//! Configuration management for psoseed

pub mod schema;

pub use schema::Config;

use crate::error::{PsoSeedError, PsoSeedResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Configuration manager
///
/// A missing config file is not an error: every section falls back to its
/// defaults, which seed `artifact_<variant>.bin` into
/// `<data dir>/cache/vulkan_pso_cache.bin`. A file that parses but names an
/// artifact outside the cache subdirectory is rejected as invalid.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("psoseed")
            .join("config.toml")
    }

    /// Load configuration, falling back to defaults if the file is missing
    pub async fn load(&self) -> PsoSeedResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> PsoSeedResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| PsoSeedError::io(format!("reading config from {}", path.display()), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| PsoSeedError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        validate(&config).map_err(|reason| PsoSeedError::ConfigInvalid {
            path: path.to_path_buf(),
            reason,
        })?;

        Ok(config)
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> PsoSeedResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            PsoSeedError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> PsoSeedResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PsoSeedError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

/// Names that end up in paths must be single, non-empty components
fn validate(config: &Config) -> Result<(), String> {
    let cache = &config.cache;
    let names = [
        ("cache.artifact_name", &cache.artifact_name),
        ("cache.cache_subdir", &cache.cache_subdir),
        ("cache.asset_prefix", &cache.asset_prefix),
    ];

    for (key, value) in names {
        if value.is_empty() {
            return Err(format!("{} must not be empty", key));
        }
        if value.contains(['/', '\\']) || value == ".." {
            return Err(format!("{} must be a plain file name, got {:?}", key, value));
        }
    }

    if config.launch.flag.is_empty() {
        return Err("launch.flag must not be empty".to_string());
    }

    Ok(())
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.toml");
        let manager = ConfigManager::with_path(path);

        let config = manager.load().await.unwrap();
        assert_eq!(config.launch.worker_count, 4);
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let manager = ConfigManager::with_path(path);

        let mut config = Config::default();
        config.device.identity = Some("hollywood".to_string());
        config.launch.worker_count = 6;

        manager.save(&config).await.unwrap();
        let loaded = manager.load().await.unwrap();

        assert_eq!(loaded.device.identity.as_deref(), Some("hollywood"));
        assert_eq!(loaded.launch.worker_count, 6);
    }

    #[tokio::test]
    async fn artifact_name_with_separator_is_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[cache]\nartifact_name = \"../escape.bin\"\n").unwrap();
        let manager = ConfigManager::with_path(path);

        let err = manager.load().await.unwrap_err();
        assert!(err.to_string().contains("cache.artifact_name"));
    }

    #[tokio::test]
    async fn empty_launch_flag_is_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[launch]\nflag = \"\"\n").unwrap();
        let manager = ConfigManager::with_path(path);

        let err = manager.load().await.unwrap_err();
        assert!(matches!(err, PsoSeedError::ConfigInvalid { .. }));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[tokio::test]
    async fn invalid_config_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[launch]\nworker_count = \"many\"\n").unwrap();
        let manager = ConfigManager::with_path(path.clone());

        let err = manager.load().await.unwrap_err();
        match err {
            PsoSeedError::ConfigInvalid { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected ConfigInvalid, got {other:?}"),
        }
    }
}
