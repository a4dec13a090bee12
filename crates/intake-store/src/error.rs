//! Error types for loading record stores.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Store file not found.
    #[error("record file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the store file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV or a missing required column.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Row has a blank `id`.
    #[error("line {line}: record id is empty")]
    EmptyId { line: u64 },

    /// `created_at` is not RFC 3339.
    #[error("line {line}: invalid created_at '{value}': {reason}")]
    InvalidTimestamp {
        line: u64,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::FileNotFound {
            path: PathBuf::from("/data/records.csv"),
        };
        assert_eq!(err.to_string(), "record file not found: /data/records.csv");

        let err = StoreError::EmptyId { line: 4 };
        assert_eq!(err.to_string(), "line 4: record id is empty");
    }
}
