//! Device identity detection
//!
//! On Android the identity is the `ro.product.device` system property
//! (e.g. `hollywood` on Quest 2, `eureka` on Quest 3). Elsewhere, or when
//! `getprop` is unavailable, every field reads as `unknown`.

use std::fmt;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

const UNKNOWN: &str = "unknown";

/// Device model, identity and product strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Marketing model name, diagnostics only
    pub model: String,
    /// Device identity used for variant selection
    pub device: String,
    /// Product name, diagnostics only
    pub product: String,
}

impl DeviceInfo {
    /// Device info with a fixed identity and unknown model/product
    pub fn with_identity(identity: impl Into<String>) -> Self {
        Self {
            model: UNKNOWN.to_string(),
            device: identity.into(),
            product: UNKNOWN.to_string(),
        }
    }

    /// Detect device info, preferring an explicit identity override
    pub async fn detect(identity_override: Option<&str>) -> Self {
        let model = getprop("ro.product.model").await;
        let product = getprop("ro.product.name").await;
        let device = match identity_override {
            Some(identity) => {
                debug!("Using device identity override: {}", identity);
                identity.to_string()
            }
            None => getprop("ro.product.device").await,
        };

        Self {
            model,
            device,
            product,
        }
    }

    /// Identity string used for variant lookup
    pub fn identity(&self) -> &str {
        &self.device
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.model, self.device, self.product)
    }
}

/// Read an Android system property, `unknown` if unavailable
async fn getprop(key: &str) -> String {
    let output = Command::new("getprop")
        .arg(key)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await;

    match output {
        Ok(out) if out.status.success() => normalize(&String::from_utf8_lossy(&out.stdout)),
        Ok(out) => {
            debug!("getprop {} exited with {}", key, out.status);
            UNKNOWN.to_string()
        }
        Err(e) => {
            debug!("getprop unavailable: {}", e);
            UNKNOWN.to_string()
        }
    }
}

fn normalize(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}
