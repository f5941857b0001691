pub mod analyze;
pub mod markers;

use std::path::Path;

use anyhow::{Context, Result};
use styloprint_markers::MarkerConfig;

/// Built-in English tables, with `overrides` merged over them when given.
pub fn resolve_markers(overrides: Option<&Path>) -> Result<MarkerConfig> {
    let english = MarkerConfig::english();
    match overrides {
        None => Ok(english),
        Some(path) => {
            let config = MarkerConfig::from_file(path)
                .with_context(|| format!("loading marker table {}", path.display()))?;
            tracing::info!(path = %path.display(), rules = config.rules.len(), "marker overrides loaded");
            Ok(config.merge_over(english))
        }
    }
}
