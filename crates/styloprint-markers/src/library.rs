//! Compiled, read-only marker matchers.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::config::MarkerConfig;
use crate::error::MarkerError;
use crate::feature::Feature;

static ENGLISH: LazyLock<MarkerLibrary> = LazyLock::new(|| {
    MarkerLibrary::compile(&MarkerConfig::english()).expect("built-in marker tables compile")
});

/// The compiled matcher for one feature.
///
/// All of a feature's patterns are joined into a single alternation, so a
/// span covered by several patterns is counted once.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    matcher: Option<Regex>,
    weight: f64,
}

impl MarkerSet {
    /// Non-overlapping matches across all of the feature's patterns.
    pub fn count(&self, text: &str) -> usize {
        self.matcher
            .as_ref()
            .map_or(0, |re| re.find_iter(text).count())
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_none()
    }
}

fn build(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Compiled marker tables keyed by feature.
///
/// Features absent from the table count zero matches.
#[derive(Debug, Clone, Default)]
pub struct MarkerLibrary {
    sets: BTreeMap<Feature, MarkerSet>,
}

impl MarkerLibrary {
    pub fn compile(config: &MarkerConfig) -> Result<Self, MarkerError> {
        let mut sets = BTreeMap::new();
        for rule in &config.rules {
            let feature = Feature::from_key(&rule.feature)
                .ok_or_else(|| MarkerError::UnknownFeature(rule.feature.clone()))?;
            if sets.contains_key(&feature) {
                return Err(MarkerError::DuplicateFeature(feature.to_string()));
            }
            if !rule.weight.is_finite() || rule.weight < 0.0 {
                return Err(MarkerError::InvalidWeight {
                    feature: feature.to_string(),
                    weight: rule.weight,
                });
            }
            let invalid = |pattern: &str, source: regex::Error| MarkerError::InvalidPattern {
                feature: feature.to_string(),
                pattern: pattern.to_string(),
                source,
            };
            // Each pattern is checked alone first so errors name the culprit.
            for pattern in &rule.patterns {
                build(pattern).map_err(|source| invalid(pattern, source))?;
            }
            let matcher = if rule.patterns.is_empty() {
                None
            } else {
                let alternation = rule
                    .patterns
                    .iter()
                    .map(|p| format!("(?:{p})"))
                    .collect::<Vec<_>>()
                    .join("|");
                Some(build(&alternation).map_err(|source| invalid(&alternation, source))?)
            };
            sets.insert(
                feature,
                MarkerSet {
                    matcher,
                    weight: rule.weight,
                },
            );
        }
        Ok(Self { sets })
    }

    /// The built-in English tables, compiled once per process.
    pub fn english() -> Self {
        ENGLISH.clone()
    }

    pub fn get(&self, feature: Feature) -> Option<&MarkerSet> {
        self.sets.get(&feature)
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.sets.contains_key(&feature)
    }

    /// Raw match count for `feature` in `text`.
    pub fn count(&self, feature: Feature, text: &str) -> usize {
        self.sets.get(&feature).map_or(0, |set| set.count(text))
    }

    /// Match count scaled by the feature weight.
    pub fn weighted_count(&self, feature: Feature, text: &str) -> f64 {
        self.sets
            .get(&feature)
            .map_or(0.0, |set| set.count(text) as f64 * set.weight)
    }
}
