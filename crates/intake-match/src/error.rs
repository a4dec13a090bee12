//! Error types for detection configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating a [`DetectionConfig`](crate::DetectionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting is out of its allowed range.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::Invalid {
            field: "similarity_threshold",
            reason: "must be between 0 and 1, got 1.5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid similarity_threshold: must be between 0 and 1, got 1.5"
        );
    }
}
