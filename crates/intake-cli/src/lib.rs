//! CLI library components for intake validation and duplicate detection.

pub mod logging;
pub mod report;
