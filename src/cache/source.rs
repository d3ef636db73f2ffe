//! Bundled asset sources
//!
//! The seeder reads cache variants through [`AssetSource`] so the bundle
//! can live in a plain directory, an APK asset manager, or a test fixture.

use crate::error::{PsoSeedError, PsoSeedResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::io::AsyncRead;

/// Byte stream over a bundled asset
pub type AssetReader = Box<dyn AsyncRead + Send + Unpin>;

/// Read-only store of bundled assets
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Open the named asset as a byte stream
    async fn open(&self, name: &str) -> PsoSeedResult<AssetReader>;

    /// Human-readable location for diagnostics
    fn describe(&self) -> String;
}

/// Assets stored as files in one directory
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetSource for DirAssetSource {
    async fn open(&self, name: &str) -> PsoSeedResult<AssetReader> {
        let path = self.root.join(name);
        match tokio::fs::File::open(&path).await {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PsoSeedError::AssetNotFound {
                name: name.to_string(),
                root: self.root.clone(),
            }),
            Err(e) => Err(PsoSeedError::AssetOpen {
                name: name.to_string(),
                source: e,
            }),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
