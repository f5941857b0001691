//! # styloprint-markers
//!
//! **Tier 1 (Marker Tables)**
//!
//! Named linguistic feature categories mapped to case-insensitive regex
//! matchers. The tables are plain data (`MarkerConfig`), compiled once into a
//! read-only `MarkerLibrary` that every analysis borrows.
//!
//! ## What belongs here
//! * The closed `Feature` key enumeration
//! * TOML loading and merging of marker tables
//! * The built-in English tables
//! * Match counting
//!
//! ## Example
//! ```ignore
//! use styloprint_markers::{Feature, MarkerConfig, MarkerLibrary};
//!
//! let overrides = MarkerConfig::from_file("markers-de.toml".as_ref())?;
//! let library = MarkerLibrary::compile(&overrides.merge_over(MarkerConfig::english()))?;
//! let hedges = library.count(Feature::Hedging, "Perhaps it might work.");
//! ```

mod config;
mod error;
mod feature;
mod library;
mod tables;

pub use config::{MarkerConfig, MarkerRule};
pub use error::MarkerError;
pub use feature::Feature;
pub use library::{MarkerLibrary, MarkerSet};
