//! Duplicate detection engine.
//!
//! A detection call runs three passes over one bounded batch of existing
//! records:
//!
//! 1. exact: the first record sharing the candidate's external identifier
//!    becomes a `DUPLICATE_EXACT` warning and is excluded from scoring;
//! 2. fuzzy: every other record gets a weighted composite score and those at
//!    or above the threshold become `SIMILAR_RECORD` warnings;
//! 3. conflict: records holding the candidate's organizational identifier
//!    under a different name become `IDENTIFIER_CONFLICT` warnings.
//!
//! Results are ordered by descending severity, then descending score, with
//! ties kept in retrieval order.

use std::cmp::Ordering;
use std::collections::HashSet;

use intake_model::{CandidateRecord, ExistingRecord, SimilarityBreakdown, Warning};
use intake_validate::{clean_identifier, validate_identifier};
use tracing::{debug, info_span, trace};

use crate::config::DetectionConfig;
use crate::score::{NormalizedCandidate, normalized_full_name};
use crate::store::RecordStore;

/// Detect duplicates with the default configuration.
///
/// `fetch` is called exactly once and its error is returned unchanged.
pub fn detect_duplicates<F, E>(candidate: &CandidateRecord, fetch: F) -> Result<Vec<Warning>, E>
where
    F: FnOnce() -> Result<Vec<ExistingRecord>, E>,
{
    DuplicateDetector::default().detect(candidate, fetch)
}

/// Scores candidates against existing records. Holds no mutable state, so a
/// single detector can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    config: DetectionConfig,
}

impl DuplicateDetector {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Run detection against records supplied by `fetch`.
    ///
    /// Batches larger than `max_candidates` are truncated, not rejected.
    pub fn detect<F, E>(&self, candidate: &CandidateRecord, fetch: F) -> Result<Vec<Warning>, E>
    where
        F: FnOnce() -> Result<Vec<ExistingRecord>, E>,
    {
        let span = info_span!("detect_duplicates");
        let _guard = span.enter();

        let mut records = fetch()?;
        self.bound(&mut records);
        let exact = records
            .iter()
            .find(|record| identifiers_match(&candidate.external_id, &record.identifier))
            .cloned();
        Ok(self.classify(candidate, exact.as_ref(), &records))
    }

    /// Run detection against a [`RecordStore`].
    ///
    /// Issues one exact-identifier lookup and one recent-candidates query.
    pub fn detect_in_store<S>(
        &self,
        candidate: &CandidateRecord,
        store: &S,
    ) -> Result<Vec<Warning>, S::Error>
    where
        S: RecordStore + ?Sized,
    {
        let span = info_span!("detect_duplicates", source = "store");
        let _guard = span.enter();

        let identifier = candidate.external_id.trim();
        let exact = if identifier.is_empty() {
            None
        } else {
            store.find_by_exact_identifier(identifier)?
        };
        let mut records = store.find_recent_candidates(self.config.max_candidates)?;
        self.bound(&mut records);
        Ok(self.classify(candidate, exact.as_ref(), &records))
    }

    /// Composite similarity of a single pair.
    pub fn score(
        &self,
        candidate: &CandidateRecord,
        existing: &ExistingRecord,
    ) -> SimilarityBreakdown {
        let prefix_len = self.config.identifier_prefix_len;
        NormalizedCandidate::new(candidate, prefix_len).score(
            existing,
            &self.config.weights,
            prefix_len,
        )
    }

    fn bound(&self, records: &mut Vec<ExistingRecord>) {
        if records.len() > self.config.max_candidates {
            debug!(
                fetched = records.len(),
                max_candidates = self.config.max_candidates,
                "truncating candidate batch"
            );
            records.truncate(self.config.max_candidates);
        }
    }

    fn classify(
        &self,
        candidate: &CandidateRecord,
        exact: Option<&ExistingRecord>,
        records: &[ExistingRecord],
    ) -> Vec<Warning> {
        let mut warnings = Vec::new();
        // Ids already reported or scored; checked before any scoring work.
        let mut seen: HashSet<&str> = HashSet::new();

        if let Some(existing) = exact {
            seen.insert(existing.id.as_str());
            warnings.push(Warning::duplicate_exact(existing));
        }

        warnings.extend(self.identifier_conflicts(candidate, exact, records));

        let prefix_len = self.config.identifier_prefix_len;
        let probe = NormalizedCandidate::new(candidate, prefix_len);
        let mut similar = Vec::new();
        for existing in records {
            if !seen.insert(existing.id.as_str()) {
                trace!(record_id = %existing.id, "skipping excluded record");
                continue;
            }
            let breakdown = probe.score(existing, &self.config.weights, prefix_len);
            trace!(
                record_id = %existing.id,
                total = breakdown.total_score,
                "scored candidate"
            );
            if breakdown.total_score >= self.config.similarity_threshold {
                similar.push(Warning::similar_record(existing, breakdown));
            }
        }
        similar.sort_by(by_score_desc);
        warnings.extend(similar);

        warnings.sort_by(|a, b| b.severity.cmp(&a.severity).then_with(|| by_score_desc(a, b)));
        debug!(
            scanned = records.len(),
            warnings = warnings.len(),
            exact = exact.is_some(),
            "duplicate detection complete"
        );
        warnings
    }

    fn identifier_conflicts(
        &self,
        candidate: &CandidateRecord,
        exact: Option<&ExistingRecord>,
        records: &[ExistingRecord],
    ) -> Vec<Warning> {
        let Some(raw) = candidate.organization_id.as_deref() else {
            return Vec::new();
        };
        if !validate_identifier(raw).is_valid() {
            return Vec::new();
        }
        let organization_id = clean_identifier(raw);
        let name = normalized_full_name(&candidate.first_name, &candidate.last_name);

        let mut checked: HashSet<&str> = HashSet::new();
        exact
            .into_iter()
            .chain(records)
            .filter(|&existing| checked.insert(existing.id.as_str()))
            .filter(|existing| {
                existing
                    .organization_id
                    .as_deref()
                    .is_some_and(|other| clean_identifier(other) == organization_id)
            })
            .filter(|existing| {
                normalized_full_name(&existing.first_name, &existing.last_name) != name
            })
            .map(|existing| Warning::identifier_conflict(existing, &organization_id))
            .collect()
    }
}

/// Trimmed, ASCII case-insensitive identifier equality. Blank never matches.
fn identifiers_match(candidate: &str, existing: &str) -> bool {
    let candidate = candidate.trim();
    !candidate.is_empty() && candidate.eq_ignore_ascii_case(existing.trim())
}

fn by_score_desc(a: &Warning, b: &Warning) -> Ordering {
    b.score.unwrap_or(0.0).total_cmp(&a.score.unwrap_or(0.0))
}
