//! Identifier and diagnosis code validation.
//!
//! Both validators are pure functions: they never fail with an error value
//! and report problems through [`ValidationResult`].

pub mod diagnosis;
pub mod identifier;

pub use diagnosis::{ChapterRange, ChapterTable, format_code, validate_code};
pub use identifier::{
    IDENTIFIER_PREFIX, clean_identifier, compute_check_digit, format_identifier,
    validate_identifier,
};
pub use intake_model::ValidationResult;
