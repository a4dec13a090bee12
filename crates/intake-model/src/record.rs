use serde::{Deserialize, Serialize};

/// An incoming record submitted for validation and duplicate detection.
///
/// Candidates are request-scoped and never stored by the detection core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub first_name: String,
    pub last_name: String,
    /// Per-record identifier such as a medical record number (6-10 chars).
    pub external_id: String,
    /// Free-text detail. Not used for scoring.
    #[serde(default)]
    pub subject_detail: String,
    /// Optional 10-digit organizational identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl CandidateRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        external_id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            external_id: external_id.into(),
            subject_detail: String::new(),
            organization_id: None,
        }
    }

    #[must_use]
    pub fn with_subject_detail(mut self, detail: impl Into<String>) -> Self {
        self.subject_detail = detail.into();
        self
    }

    #[must_use]
    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

/// A record already held by the external record store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl ExistingRecord {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            identifier: identifier.into(),
            organization_id: None,
        }
    }

    #[must_use]
    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

fn join_name(first: &str, last: &str) -> String {
    let first = first.trim();
    let last = last.trim();
    match (first.is_empty(), last.is_empty()) {
        (true, _) => last.to_string(),
        (_, true) => first.to_string(),
        _ => format!("{first} {last}"),
    }
}
