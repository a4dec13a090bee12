//! Composite record scoring.
//!
//! Each field is normalized and compared with [`similarity`]; the per-field
//! scores are combined with [`ScoreWeights`].

use intake_model::{CandidateRecord, ExistingRecord, SimilarityBreakdown};
use serde::{Deserialize, Serialize};

use crate::similarity::similarity;

pub const DEFAULT_FIRST_NAME_WEIGHT: f64 = 0.3;
pub const DEFAULT_LAST_NAME_WEIGHT: f64 = 0.5;
pub const DEFAULT_IDENTIFIER_WEIGHT: f64 = 0.2;

/// Field weights for the composite score. Weights should sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub first_name: f64,
    pub last_name: f64,
    pub identifier: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            first_name: DEFAULT_FIRST_NAME_WEIGHT,
            last_name: DEFAULT_LAST_NAME_WEIGHT,
            identifier: DEFAULT_IDENTIFIER_WEIGHT,
        }
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.first_name + self.last_name + self.identifier
    }

    /// Weighted total of the per-field scores, clamped to `[0, 1]`.
    pub fn composite(&self, first_name: f64, last_name: f64, identifier: f64) -> f64 {
        (first_name * self.first_name + last_name * self.last_name + identifier * self.identifier)
            .clamp(0.0, 1.0)
    }
}

/// Lowercases, trims and collapses inner whitespace.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased leading `len` characters of a trimmed identifier.
pub fn identifier_prefix(raw: &str, len: usize) -> String {
    raw.trim().to_lowercase().chars().take(len).collect()
}

/// Candidate fields normalized once per detection call.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedCandidate {
    pub first_name: String,
    pub last_name: String,
    pub identifier_prefix: String,
}

impl NormalizedCandidate {
    pub fn new(candidate: &CandidateRecord, prefix_len: usize) -> Self {
        Self {
            first_name: normalize_name(&candidate.first_name),
            last_name: normalize_name(&candidate.last_name),
            identifier_prefix: identifier_prefix(&candidate.external_id, prefix_len),
        }
    }

    pub fn score(
        &self,
        existing: &ExistingRecord,
        weights: &ScoreWeights,
        prefix_len: usize,
    ) -> SimilarityBreakdown {
        let first_name_score = similarity(&self.first_name, &normalize_name(&existing.first_name));
        let last_name_score = similarity(&self.last_name, &normalize_name(&existing.last_name));
        let identifier_score = similarity(
            &self.identifier_prefix,
            &identifier_prefix(&existing.identifier, prefix_len),
        );
        SimilarityBreakdown {
            first_name_score,
            last_name_score,
            identifier_score,
            total_score: weights.composite(first_name_score, last_name_score, identifier_score),
        }
    }
}

pub(crate) fn normalized_full_name(first: &str, last: &str) -> String {
    join_normalized(&normalize_name(first), &normalize_name(last))
}

fn join_normalized(first: &str, last: &str) -> String {
    match (first.is_empty(), last.is_empty()) {
        (true, _) => last.to_string(),
        (_, true) => first.to_string(),
        _ => format!("{first} {last}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((ScoreWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn composite_applies_weights() {
        let weights = ScoreWeights::default();
        assert!((weights.composite(1.0, 0.0, 0.0) - 0.3).abs() < 1e-9);
        assert!((weights.composite(0.0, 1.0, 0.0) - 0.5).abs() < 1e-9);
        assert!((weights.composite(0.0, 0.0, 1.0) - 0.2).abs() < 1e-9);
        assert!((weights.composite(1.0, 1.0, 1.0) - 1.0).abs() < 1e-9);
        assert!(weights.composite(1.0, 1.0, 1.0) <= 1.0);
    }

    #[test]
    fn normalizes_names_and_prefixes() {
        assert_eq!(normalize_name("  Mary   ANN "), "mary ann");
        assert_eq!(identifier_prefix(" MRN100234 ", 6), "mrn100");
        assert_eq!(identifier_prefix("ab", 6), "ab");
        assert_eq!(normalized_full_name(" Jo ", ""), "jo");
    }

    #[test]
    fn scores_nickname_pair() {
        let candidate = CandidateRecord::new("Michael", "Smith", "MRN100234");
        let existing = ExistingRecord::new("rec-1", "Mikey", "Smith", "MRN100235");
        let probe = NormalizedCandidate::new(&candidate, 6);
        let breakdown = probe.score(&existing, &ScoreWeights::default(), 6);
        assert_eq!(breakdown.last_name_score, 1.0);
        assert_eq!(breakdown.identifier_score, 1.0);
        assert!((breakdown.total_score - 0.9223).abs() < 1e-3);
    }
}
