//! psoseed - Vulkan PSO cache seeding for a VR app
//!
//! Copies the bundled pipeline cache variant matching the device into the
//! persistent data directory on first run, and injects the job worker
//! count into the host command line.

pub mod cache;
pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod launch;

pub use error::{PsoSeedError, PsoSeedResult};
