//! Error types for psoseed
//!
//! All modules use `PsoSeedResult<T>` as their return type. The seeder
//! boundary never propagates these; it folds them into a `SeedOutcome`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for psoseed operations
pub type PsoSeedResult<T> = Result<T, PsoSeedError>;

/// All errors that can occur in psoseed
#[derive(Error, Debug)]
pub enum PsoSeedError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Asset errors
    #[error("Bundled asset not found: {name} (searched {root})")]
    AssetNotFound { name: String, root: PathBuf },

    #[error("Failed to open bundled asset {name}: {source}")]
    AssetOpen {
        name: String,
        #[source]
        source: std::io::Error,
    },

    // Cache artifact errors
    #[error("Failed to copy {asset} to {path}: {source}")]
    ArtifactCopy {
        asset: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PsoSeedError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigInvalid { .. } => Some("Run: psoseed config init --force"),
            Self::AssetNotFound { .. } => {
                Some("Check --assets-dir or [cache] assets_dir in the config")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PsoSeedError::AssetNotFound {
            name: "artifact_default.bin".to_string(),
            root: PathBuf::from("/assets"),
        };
        assert!(err.to_string().contains("artifact_default.bin"));
        assert!(err.to_string().contains("/assets"));
    }

    #[test]
    fn error_hint() {
        let err = PsoSeedError::ConfigInvalid {
            path: PathBuf::from("/x/config.toml"),
            reason: "expected integer".to_string(),
        };
        assert_eq!(err.hint(), Some("Run: psoseed config init --force"));

        let err = PsoSeedError::AssetNotFound {
            name: "artifact_legacy.bin".to_string(),
            root: PathBuf::from("/assets"),
        };
        assert!(err.hint().unwrap().contains("--assets-dir"));

        let err = PsoSeedError::io("x", std::io::Error::new(std::io::ErrorKind::Other, "y"));
        assert_eq!(err.hint(), None);
    }

    #[test]
    fn io_error_keeps_context() {
        let err = PsoSeedError::io(
            "reading asset",
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        );
        assert_eq!(err.to_string(), "IO error: reading asset: boom");
    }
}
