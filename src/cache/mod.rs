//! Vulkan PSO cache seeding
//!
//! Ships one precomputed pipeline cache per hardware class and copies the
//! matching variant into the app's data directory on first run.
//!
//! # Artifact Lifecycle
//!
//! | State | Trigger | Description |
//! |-------|---------|-------------|
//! | Absent | fresh install | No artifact, next seed copies the bundle |
//! | Present | seed or driver write | Never overwritten or removed here |
//!
//! A copy that fails partway removes what it wrote, so the artifact is
//! always either absent or complete.

pub mod seeder;
pub mod source;
pub mod variant;

pub use seeder::{artifact_path, ArtifactStatus, CacheSeeder, SeedOutcome};
pub use source::{AssetReader, AssetSource, DirAssetSource};
pub use variant::{CacheVariant, DeviceMatch, VariantRule, VariantTable};
