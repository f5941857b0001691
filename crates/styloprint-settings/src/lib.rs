//! # styloprint-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings for an analysis run. These mirror the CLI flags so
//! library consumers can drive the engine from a TOML file.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values
//! * TOML loading
//!
//! ## What does NOT belong here
//! * Clap parsing (use the `styloprint` crate)
//! * Marker compilation (use styloprint-markers)
//! * Business logic

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use styloprint_types::Timeframe;

/// Errors from loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Settings for a single `analyze` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeSettings {
    /// Recency window (`7days`, `30days`, `3months`, `6months`).
    pub timeframe: Timeframe,

    /// Marker table overriding the built-in English features it names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<PathBuf>,

    /// Fixed "now" for the timeframe cutoff, as an RFC 3339 string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,

    /// Compute per-document features on the rayon pool.
    pub parallel: bool,
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::default(),
            markers: None,
            as_of: None,
            parallel: true,
        }
    }
}

impl AnalyzeSettings {
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The instant the timeframe is measured back from.
    pub fn now(&self) -> DateTime<Utc> {
        self.as_of.unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn defaults_are_seven_days_and_parallel() {
        let s = AnalyzeSettings::default();
        assert_eq!(s.timeframe, Timeframe::SevenDays);
        assert!(s.parallel);
        assert!(s.markers.is_none());
        assert!(s.as_of.is_none());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            AnalyzeSettings::from_toml("").unwrap(),
            AnalyzeSettings::default()
        );
    }

    #[test]
    fn full_toml_parses() {
        let s = AnalyzeSettings::from_toml(
            r#"
timeframe = "3months"
markers = "markers/de.toml"
as_of = "2024-06-01T00:00:00Z"
parallel = false
"#,
        )
        .unwrap();
        assert_eq!(s.timeframe, Timeframe::ThreeMonths);
        assert_eq!(s.markers, Some(PathBuf::from("markers/de.toml")));
        assert_eq!(
            s.as_of,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
        );
        assert!(!s.parallel);
    }

    #[test]
    fn unknown_timeframe_falls_back() {
        let s = AnalyzeSettings::from_toml(r#"timeframe = "decade""#).unwrap();
        assert_eq!(s.timeframe, Timeframe::SevenDays);
    }

    #[test]
    fn as_of_pins_now() {
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let s = AnalyzeSettings {
            as_of: Some(at),
            ..AnalyzeSettings::default()
        };
        assert_eq!(s.now(), at);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = AnalyzeSettings::from_toml("timeframe = ").unwrap_err();
        assert!(matches!(err, SettingsError::TomlError(_)));
    }
}
