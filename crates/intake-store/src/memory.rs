//! In-memory record store.

use std::cmp::Ordering;
use std::convert::Infallible;

use chrono::{DateTime, Utc};
use intake_match::RecordStore;
use intake_model::ExistingRecord;

/// An existing record plus the metadata the store uses for recency.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub record: ExistingRecord,
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredRecord {
    pub fn new(record: ExistingRecord) -> Self {
        Self {
            record,
            created_at: None,
        }
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

impl From<ExistingRecord> for StoredRecord {
    fn from(record: ExistingRecord) -> Self {
        Self::new(record)
    }
}

/// Record store held entirely in memory.
///
/// Recency order is newest `created_at` first; untimestamped records come
/// after all timestamped ones, latest insertion first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<StoredRecord>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = StoredRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, record: impl Into<StoredRecord>) {
        self.records.push(record.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    fn recent_order(&self) -> Vec<&StoredRecord> {
        let mut ordered: Vec<(usize, &StoredRecord)> = self.records.iter().enumerate().collect();
        ordered.sort_by(|(a_idx, a), (b_idx, b)| {
            let by_time = match (a.created_at, b.created_at) {
                (Some(a_time), Some(b_time)) => b_time.cmp(&a_time),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            by_time.then_with(|| b_idx.cmp(a_idx))
        });
        ordered.into_iter().map(|(_, record)| record).collect()
    }
}

impl RecordStore for InMemoryRecordStore {
    type Error = Infallible;

    fn find_by_exact_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<ExistingRecord>, Self::Error> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Ok(None);
        }
        Ok(self
            .recent_order()
            .into_iter()
            .find(|stored| stored.record.identifier.trim().eq_ignore_ascii_case(identifier))
            .map(|stored| stored.record.clone()))
    }

    fn find_recent_candidates(&self, limit: usize) -> Result<Vec<ExistingRecord>, Self::Error> {
        Ok(self
            .recent_order()
            .into_iter()
            .take(limit)
            .map(|stored| stored.record.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(id: &str, identifier: &str) -> ExistingRecord {
        ExistingRecord::new(id, "Ann", "Lee", identifier)
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap()
    }

    fn ids(records: &[ExistingRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn recent_candidates_newest_first() {
        let mut store = InMemoryRecordStore::new();
        store.insert(StoredRecord::new(record("untimed-1", "A1")));
        store.insert(StoredRecord::new(record("old", "A2")).with_created_at(at(1)));
        store.insert(StoredRecord::new(record("untimed-2", "A3")));
        store.insert(StoredRecord::new(record("new", "A4")).with_created_at(at(5)));

        let recent = store.find_recent_candidates(10).unwrap();
        assert_eq!(ids(&recent), vec!["new", "old", "untimed-2", "untimed-1"]);

        let limited = store.find_recent_candidates(2).unwrap();
        assert_eq!(ids(&limited), vec!["new", "old"]);
    }

    #[test]
    fn exact_lookup_ignores_case_and_padding() {
        let mut store = InMemoryRecordStore::new();
        store.insert(record("rec-1", "MRN100234"));

        let found = store.find_by_exact_identifier(" mrn100234 ").unwrap();
        assert_eq!(found.map(|r| r.id), Some("rec-1".to_string()));
        assert!(store.find_by_exact_identifier("MRN1002").unwrap().is_none());
        assert!(store.find_by_exact_identifier("  ").unwrap().is_none());
    }
}
