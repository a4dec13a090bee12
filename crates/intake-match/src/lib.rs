//! Fuzzy duplicate detection for intake records.
//!
//! [`similarity`] is the domain-independent string metric; [`DuplicateDetector`]
//! applies it field by field against records from an external store and
//! turns high scores into [`Warning`](intake_model::Warning) values.

pub mod config;
pub mod engine;
pub mod error;
pub mod score;
pub mod similarity;
pub mod store;

pub use config::{
    DEFAULT_IDENTIFIER_PREFIX_LEN, DEFAULT_MAX_CANDIDATES, DEFAULT_SIMILARITY_THRESHOLD,
    DetectionConfig,
};
pub use engine::{DuplicateDetector, detect_duplicates};
pub use error::ConfigError;
pub use score::{ScoreWeights, identifier_prefix, normalize_name};
pub use similarity::{jaro, similarity};
pub use store::RecordStore;
