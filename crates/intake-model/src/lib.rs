//! Record, validation and warning types shared by the intake crates.

pub mod record;
pub mod validation;
pub mod warning;

pub use record::{CandidateRecord, ExistingRecord};
pub use validation::ValidationResult;
pub use warning::{Severity, SimilarityBreakdown, Warning, WarningKind};
