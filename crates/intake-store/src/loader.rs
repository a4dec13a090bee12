//! CSV loading for the in-memory store.
//!
//! Required columns: `id`, `first_name`, `last_name`, `identifier`.
//! Optional columns: `organization_id`, `created_at` (RFC 3339).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use intake_model::ExistingRecord;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::memory::{InMemoryRecordStore, StoredRecord};

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    first_name: String,
    last_name: String,
    identifier: String,
    #[serde(default)]
    organization_id: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl CsvRow {
    fn into_stored(self, line: u64) -> Result<StoredRecord> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(StoreError::EmptyId { line });
        }
        let created_at = match self.created_at.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_timestamp(value, line)?),
        };
        let organization_id = self
            .organization_id
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Ok(StoredRecord {
            record: ExistingRecord {
                id: id.to_string(),
                first_name: self.first_name,
                last_name: self.last_name,
                identifier: self.identifier,
                organization_id,
            },
            created_at,
        })
    }
}

fn parse_timestamp(value: &str, line: u64) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| StoreError::InvalidTimestamp {
            line,
            value: value.to_string(),
            reason: err.to_string(),
        })
}

/// Read records from CSV data with a header row.
pub fn read_records_csv<R: Read>(reader: R) -> Result<InMemoryRecordStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let mut records = Vec::new();
    for (idx, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1.
        let line = idx as u64 + 2;
        records.push(row?.into_stored(line)?);
    }
    Ok(InMemoryRecordStore::from_records(records))
}

/// Load a CSV file into an in-memory store.
pub fn load_records_csv(path: &Path) -> Result<InMemoryRecordStore> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StoreError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let store = read_records_csv(file)?;
    debug!(path = %path.display(), records = store.len(), "loaded record store");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_optional_columns() {
        let data = "id,first_name,last_name,identifier,organization_id,created_at\n\
                    rec-1,Ann,Lee,MRN1,1234567893,2024-03-01T09:00:00Z\n\
                    rec-2,Bob,Ray,MRN2,,\n";
        let store = read_records_csv(data.as_bytes()).unwrap();
        let records = store.records();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].record.organization_id.as_deref(),
            Some("1234567893")
        );
        assert!(records[0].created_at.is_some());
        assert_eq!(records[1].record.organization_id, None);
        assert_eq!(records[1].created_at, None);
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let data = "id,first_name,last_name,identifier\nrec-1,Ann,Lee,MRN1\n";
        let store = read_records_csv(data.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejects_bad_timestamp_with_line() {
        let data = "id,first_name,last_name,identifier,created_at\n\
                    rec-1,Ann,Lee,MRN1,2024-03-01T09:00:00Z\n\
                    rec-2,Bob,Ray,MRN2,yesterday\n";
        let err = read_records_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidTimestamp { line: 3, .. }));
    }

    #[test]
    fn rejects_blank_id() {
        let data = "id,first_name,last_name,identifier\n ,Ann,Lee,MRN1\n";
        let err = read_records_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::EmptyId { line: 2 }));
    }

    #[test]
    fn missing_required_column_is_csv_error() {
        let data = "id,first_name,identifier\nrec-1,Ann,MRN1\n";
        let err = read_records_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::Csv(_)));
    }
}
