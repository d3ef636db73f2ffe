//! One-time PSO cache seeding
//!
//! Copies the bundled cache variant for this device into the persistent
//! data directory unless an artifact is already there. Seeding is best
//! effort: every failure is logged and reported as
//! [`SeedOutcome::FailedNonFatal`], never returned as an error, so a bad
//! bundle can only cost a cold pipeline compile, not a failed startup.

use crate::cache::source::AssetSource;
use crate::cache::variant::{CacheVariant, VariantTable};
use crate::device::DeviceInfo;
use crate::error::{PsoSeedError, PsoSeedResult};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, error, info, warn};

/// Result of a seeding attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// Artifact was copied from the bundle
    Created { bytes: u64 },
    /// Artifact already existed and was left untouched
    AlreadyPresent,
    /// Seeding failed; startup continues without a warm cache
    FailedNonFatal { reason: String },
}

impl SeedOutcome {
    /// Initialization always succeeds from the caller's point of view
    pub fn is_success(&self) -> bool {
        true
    }

    /// Whether this run wrote the artifact
    pub fn created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { bytes } => write!(f, "created ({} bytes)", bytes),
            Self::AlreadyPresent => write!(f, "already present"),
            Self::FailedNonFatal { reason } => write!(f, "failed (non-fatal): {}", reason),
        }
    }
}

/// Read-only view of what seeding would do and what is on disk
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactStatus {
    /// Device identity used for lookup
    pub device: String,
    /// Selected variant
    pub variant: CacheVariant,
    /// Bundled asset name for the variant
    pub asset: String,
    /// Artifact destination
    pub destination: PathBuf,
    /// Whether the artifact exists
    pub present: bool,
    /// Artifact size in bytes, if present
    pub size: Option<u64>,
    /// Short SHA256 of the bundled asset, if readable
    pub source_digest: Option<String>,
    /// Short SHA256 of the artifact, if readable
    pub artifact_digest: Option<String>,
}

impl ArtifactStatus {
    /// Whether the artifact matches the bundled asset, when both are readable
    pub fn matches_source(&self) -> Option<bool> {
        match (&self.source_digest, &self.artifact_digest) {
            (Some(source), Some(artifact)) => Some(source == artifact),
            _ => None,
        }
    }
}

/// Compose `<data_dir>/<subdir>/<name>`
pub fn artifact_path(data_dir: &Path, subdir: &str, name: &str) -> PathBuf {
    data_dir.join(subdir).join(name)
}

/// Seeds one cache artifact from a bundle of variants
pub struct CacheSeeder<S: AssetSource> {
    source: S,
    table: VariantTable,
    asset_prefix: String,
    destination: PathBuf,
}

impl<S: AssetSource> CacheSeeder<S> {
    /// Create a seeder writing to `destination`
    pub fn new(
        source: S,
        table: VariantTable,
        asset_prefix: impl Into<String>,
        destination: PathBuf,
    ) -> Self {
        Self {
            source,
            table,
            asset_prefix: asset_prefix.into(),
            destination,
        }
    }

    /// Artifact destination path
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Resolve the variant and bundled asset name for a device
    pub fn resolve(&self, device: &DeviceInfo) -> (CacheVariant, String) {
        let variant = self.table.resolve(device.identity());
        let asset = variant.asset_name(&self.asset_prefix);
        (variant, asset)
    }

    /// Seed the artifact for this device. Never fails.
    pub async fn seed(&self, device: &DeviceInfo) -> SeedOutcome {
        info!("Beginning Vulkan PSO cache initialization");
        info!("Device info: {}", device);

        let (variant, asset) = self.resolve(device);
        info!("Using {} variant ({})", variant, asset);
        info!("Artifact path: {}", self.destination.display());

        let outcome = match self.copy_if_absent(&asset).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Failed to initialize Vulkan PSO cache: {}", e);
                SeedOutcome::FailedNonFatal {
                    reason: e.to_string(),
                }
            }
        };

        info!("PSO cache seeding {}", outcome);
        outcome
    }

    async fn copy_if_absent(&self, asset: &str) -> PsoSeedResult<SeedOutcome> {
        if self.destination.exists() {
            info!(
                "Vulkan PSO cache already exists at {}",
                self.destination.display()
            );
            return Ok(SeedOutcome::AlreadyPresent);
        }

        let mut reader = self.source.open(asset).await?;
        debug!("Opened {} from {}", asset, self.source.describe());

        if let Some(parent) = self.destination.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                PsoSeedError::io(format!("creating directory {}", parent.display()), e)
            })?;
        }

        // create_new: an artifact that appeared since the check is never clobbered
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.destination)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                warn!(
                    "Artifact appeared at {} during seeding, leaving it",
                    self.destination.display()
                );
                return Ok(SeedOutcome::AlreadyPresent);
            }
            Err(e) => {
                return Err(PsoSeedError::io(
                    format!("creating {}", self.destination.display()),
                    e,
                ))
            }
        };

        info!("Copying Vulkan PSO cache to {}", self.destination.display());
        let copied = async {
            let bytes = tokio::io::copy(&mut reader, &mut file).await?;
            file.flush().await?;
            file.sync_all().await?;
            Ok::<u64, std::io::Error>(bytes)
        }
        .await;

        match copied {
            Ok(bytes) => Ok(SeedOutcome::Created { bytes }),
            Err(e) => {
                drop(file);
                if let Err(cleanup) = fs::remove_file(&self.destination).await {
                    warn!(
                        "Failed to remove partial artifact {}: {}",
                        self.destination.display(),
                        cleanup
                    );
                }
                Err(PsoSeedError::ArtifactCopy {
                    asset: asset.to_string(),
                    path: self.destination.clone(),
                    source: e,
                })
            }
        }
    }

    /// Report the resolved plan and on-disk state without writing anything
    pub async fn inspect(&self, device: &DeviceInfo) -> ArtifactStatus {
        let (variant, asset) = self.resolve(device);

        let size = fs::metadata(&self.destination).await.ok().map(|m| m.len());
        let source_digest = match self.source.open(&asset).await {
            Ok(mut reader) => {
                let mut contents = Vec::new();
                match reader.read_to_end(&mut contents).await {
                    Ok(_) => Some(short_digest(&contents)),
                    Err(e) => {
                        debug!("Failed to read {}: {}", asset, e);
                        None
                    }
                }
            }
            Err(e) => {
                debug!("Bundled asset unavailable: {}", e);
                None
            }
        };
        let artifact_digest = fs::read(&self.destination)
            .await
            .ok()
            .map(|contents| short_digest(&contents));

        ArtifactStatus {
            device: device.identity().to_string(),
            variant,
            asset,
            destination: self.destination.clone(),
            present: size.is_some(),
            size,
            source_digest,
            artifact_digest,
        }
    }
}

/// SHA256 of `contents`, first 12 hex chars
fn short_digest(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    let result = hasher.finalize();
    hex::encode(&result[..6])
}
