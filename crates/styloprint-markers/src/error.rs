use thiserror::Error;

/// Errors from loading or compiling marker tables.
#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("Failed to read marker file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse marker TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Failed to render marker TOML: {0}")]
    TomlRenderError(#[from] toml::ser::Error),

    #[error("Unknown marker feature '{0}'")]
    UnknownFeature(String),

    #[error("Marker feature '{0}' is defined more than once")]
    DuplicateFeature(String),

    #[error("Invalid pattern '{pattern}' for feature '{feature}': {source}")]
    InvalidPattern {
        feature: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Weight for feature '{feature}' must be finite and non-negative, got {weight}")]
    InvalidWeight { feature: String, weight: f64 },
}
