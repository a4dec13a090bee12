//! Detection settings.
//!
//! Settings can be loaded from TOML; every key is optional:
//!
//! ```toml
//! similarity_threshold = 0.75
//! max_candidates = 50
//! identifier_prefix_len = 6
//!
//! [weights]
//! first_name = 0.3
//! last_name = 0.5
//! identifier = 0.2
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::score::ScoreWeights;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MAX_CANDIDATES: usize = 100;
pub const DEFAULT_IDENTIFIER_PREFIX_LEN: usize = 6;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectionConfig {
    /// Minimum composite score for a similar-record warning.
    pub similarity_threshold: f64,
    /// Upper bound on existing records scanned per detection call.
    pub max_candidates: usize,
    /// Leading identifier characters compared in the fuzzy pass.
    pub identifier_prefix_len: usize,
    pub weights: ScoreWeights,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            identifier_prefix_len: DEFAULT_IDENTIFIER_PREFIX_LEN,
            weights: ScoreWeights::default(),
        }
    }
}

impl DetectionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::Invalid {
                field: "similarity_threshold",
                reason: format!("must be between 0 and 1, got {}", self.similarity_threshold),
            });
        }
        if self.max_candidates == 0 {
            return Err(ConfigError::Invalid {
                field: "max_candidates",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.identifier_prefix_len == 0 {
            return Err(ConfigError::Invalid {
                field: "identifier_prefix_len",
                reason: "must be at least 1".to_string(),
            });
        }
        let weights = &self.weights;
        let all_weights = [weights.first_name, weights.last_name, weights.identifier];
        if all_weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::Invalid {
                field: "weights",
                reason: "weights must be finite and non-negative".to_string(),
            });
        }
        if (weights.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::Invalid {
                field: "weights",
                reason: format!("must sum to 1, got {}", weights.sum()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = DetectionConfig::from_toml_str("").expect("parse empty config");
        assert_eq!(config, DetectionConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = DetectionConfig::from_toml_str(
            "similarity_threshold = 0.8\n[weights]\nfirst_name = 0.2\nlast_name = 0.6\n",
        )
        .expect("parse config");
        assert_eq!(config.similarity_threshold, 0.8);
        assert_eq!(config.max_candidates, DEFAULT_MAX_CANDIDATES);
        assert_eq!(config.weights.first_name, 0.2);
        assert_eq!(config.weights.identifier, 0.2);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = DetectionConfig::from_toml_str("similarity_threshold = 1.5").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "similarity_threshold",
                ..
            }
        ));

        let err = DetectionConfig::from_toml_str("max_candidates = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_candidates", .. }));

        let err = DetectionConfig::from_toml_str("[weights]\nfirst_name = 0.9").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "weights", .. }));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = DetectionConfig::from_toml_str("threshold = 0.5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
