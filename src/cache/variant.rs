//! Cache variant selection
//!
//! Maps a device identity to one of the bundled PSO cache variants. Rules
//! are evaluated in order and the first match wins; an identity no rule
//! matches falls through to [`CacheVariant::Default`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bundled PSO cache variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheVariant {
    /// Cache baked on current-generation hardware
    #[default]
    Default,
    /// Cache baked on the previous hardware generation
    Legacy,
}

impl CacheVariant {
    /// Name of the bundled asset holding this variant
    pub fn asset_name(&self, prefix: &str) -> String {
        format!("{}_{}.bin", prefix, self)
    }
}

impl fmt::Display for CacheVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Legacy => "legacy",
        };
        write!(f, "{}", name)
    }
}

/// Predicate over a device identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceMatch {
    /// Identity equals the string exactly
    Exact(String),
    /// Identity starts with the string
    Prefix(String),
}

impl DeviceMatch {
    /// Check whether the identity satisfies this predicate
    pub fn matches(&self, identity: &str) -> bool {
        match self {
            Self::Exact(expected) => identity == expected,
            Self::Prefix(prefix) => identity.starts_with(prefix.as_str()),
        }
    }
}

/// A single `(predicate, variant)` rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRule {
    /// Variant selected when the predicate matches
    pub variant: CacheVariant,

    /// Device predicate
    #[serde(rename = "match")]
    pub matcher: DeviceMatch,
}

impl VariantRule {
    /// Rule selecting `variant` for exactly `identity`
    pub fn exact(identity: impl Into<String>, variant: CacheVariant) -> Self {
        Self {
            variant,
            matcher: DeviceMatch::Exact(identity.into()),
        }
    }
}

/// Ordered variant rules, first match wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTable {
    rules: Vec<VariantRule>,
}

impl VariantTable {
    /// Build a table from rules in evaluation order
    pub fn new(rules: Vec<VariantRule>) -> Self {
        Self { rules }
    }

    /// Built-in rules: Quest 2 (`hollywood`) uses the legacy cache
    pub fn builtin_rules() -> Vec<VariantRule> {
        vec![VariantRule::exact("hollywood", CacheVariant::Legacy)]
    }

    /// Resolve the variant for a device identity
    pub fn resolve(&self, identity: &str) -> CacheVariant {
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(identity))
            .map(|rule| rule.variant)
            .unwrap_or_default()
    }
}

impl Default for VariantTable {
    fn default() -> Self {
        Self::new(Self::builtin_rules())
    }
}
