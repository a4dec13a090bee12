//! Duplicate-detection warnings.
//!
//! Warnings are non-blocking findings. The detection core only classifies
//! and scores; deciding whether to link, block or merge belongs to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::ExistingRecord;

/// Warning severity, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    /// Existing record shares the candidate's external identifier.
    DuplicateExact,
    /// Existing record scored at or above the similarity threshold.
    SimilarRecord,
    /// A differently named record holds the same organizational identifier.
    IdentifierConflict,
}

impl WarningKind {
    pub const fn default_severity(&self) -> Severity {
        match self {
            Self::DuplicateExact => Severity::High,
            Self::SimilarRecord => Severity::Medium,
            Self::IdentifierConflict => Severity::High,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::DuplicateExact => "DUPLICATE_EXACT",
            Self::SimilarRecord => "SIMILAR_RECORD",
            Self::IdentifierConflict => "IDENTIFIER_CONFLICT",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-field similarity scores for one candidate/existing pair.
///
/// Every score is in `[0, 1]`. Breakdowns are recomputed on each comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityBreakdown {
    pub first_name_score: f64,
    pub last_name_score: f64,
    pub identifier_score: f64,
    pub total_score: f64,
}

impl SimilarityBreakdown {
    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        format!(
            "first name: {:.0}%; last name: {:.0}%; identifier: {:.0}%",
            self.first_name_score * 100.0,
            self.last_name_score * 100.0,
            self.identifier_score * 100.0
        )
    }
}

/// A structured duplicate-detection finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub kind: WarningKind,
    pub severity: Severity,
    pub message: String,
    pub referenced_record_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<SimilarityBreakdown>,
}

impl Warning {
    pub fn duplicate_exact(existing: &ExistingRecord) -> Self {
        let kind = WarningKind::DuplicateExact;
        Self {
            kind,
            severity: kind.default_severity(),
            message: format!(
                "record {} already uses identifier '{}'",
                existing.id,
                existing.identifier.trim()
            ),
            referenced_record_id: existing.id.clone(),
            score: None,
            breakdown: None,
        }
    }

    pub fn similar_record(existing: &ExistingRecord, breakdown: SimilarityBreakdown) -> Self {
        let kind = WarningKind::SimilarRecord;
        Self {
            kind,
            severity: kind.default_severity(),
            message: format!(
                "record {} looks similar ({:.0}% match)",
                existing.id,
                breakdown.total_score * 100.0
            ),
            referenced_record_id: existing.id.clone(),
            score: Some(breakdown.total_score),
            breakdown: Some(breakdown),
        }
    }

    pub fn identifier_conflict(existing: &ExistingRecord, organization_id: &str) -> Self {
        let kind = WarningKind::IdentifierConflict;
        Self {
            kind,
            severity: kind.default_severity(),
            message: format!(
                "organizational identifier {organization_id} is registered to record {} under a different name",
                existing.id
            ),
            referenced_record_id: existing.id.clone(),
            score: None,
            breakdown: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_low_to_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert_eq!(Severity::parse(" HIGH "), Some(Severity::High));
        assert_eq!(Severity::parse("critical"), None);
    }

    #[test]
    fn similar_record_carries_score() {
        let existing = ExistingRecord::new("rec-7", "Mikey", "Smith", "MRN100235");
        let breakdown = SimilarityBreakdown {
            first_name_score: 0.74,
            last_name_score: 1.0,
            identifier_score: 1.0,
            total_score: 0.922,
        };
        let warning = Warning::similar_record(&existing, breakdown);
        assert_eq!(warning.kind, WarningKind::SimilarRecord);
        assert_eq!(warning.severity, Severity::Medium);
        assert_eq!(warning.score, Some(0.922));
        assert_eq!(warning.referenced_record_id, "rec-7");
        assert!(warning.message.contains("92%"));
    }
}
