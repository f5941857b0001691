//! Marker table definitions as plain, serializable data.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MarkerError;
use crate::tables;

/// One feature category: its key, matchers, and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRule {
    /// Feature key, e.g. `hedging` or `archetype.architect`.
    pub feature: String,

    /// Case-insensitive regular expressions.
    pub patterns: Vec<String>,

    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl MarkerRule {
    pub fn new(feature: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            feature: feature.into(),
            patterns,
            weight: default_weight(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// A full marker table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub rules: Vec<MarkerRule>,
}

impl MarkerConfig {
    /// The built-in English tables.
    pub fn english() -> Self {
        tables::english()
    }

    /// Parse a marker table from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, MarkerError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a marker table from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, MarkerError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> Result<String, MarkerError> {
        Ok(toml::to_string(self)?)
    }

    /// Overlay `self` on `base`: features named here replace the base rule
    /// wholesale, all other base rules are kept in their original order.
    pub fn merge_over(self, base: MarkerConfig) -> MarkerConfig {
        let overridden: BTreeSet<String> = self
            .rules
            .iter()
            .map(|r| r.feature.trim().to_string())
            .collect();
        let mut rules: Vec<MarkerRule> = base
            .rules
            .into_iter()
            .filter(|r| !overridden.contains(r.feature.trim()))
            .collect();
        rules.extend(self.rules);
        MarkerConfig { rules }
    }
}
