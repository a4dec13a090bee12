//! Record store collaborator for intake duplicate detection.
//!
//! Implements [`RecordStore`](intake_match::RecordStore) over records held in
//! memory, optionally loaded from CSV.

pub mod error;
pub mod loader;
pub mod memory;

pub use error::{Result, StoreError};
pub use loader::{load_records_csv, read_records_csv};
pub use memory::{InMemoryRecordStore, StoredRecord};
