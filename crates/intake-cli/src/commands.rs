use anyhow::{Context, Result};
use tracing::{info, info_span};

use intake_cli::logging::redact_value;
use intake_cli::report::{ValidationRow, code_rows, identifier_rows};
use intake_match::{DetectionConfig, DuplicateDetector};
use intake_model::{CandidateRecord, Warning};
use intake_store::load_records_csv;

use crate::cli::{DetectArgs, ValuesArgs};

pub fn run_identifier(args: &ValuesArgs) -> Vec<ValidationRow> {
    identifier_rows(&args.values)
}

pub fn run_code(args: &ValuesArgs) -> Vec<ValidationRow> {
    code_rows(&args.values)
}

pub fn run_detect(args: &DetectArgs) -> Result<Vec<Warning>> {
    let config = detection_config(args)?;
    let store = load_records_csv(&args.store)
        .with_context(|| format!("load record store {}", args.store.display()))?;

    let candidate = candidate_from_args(args);
    let span = info_span!("detect", records = store.len());
    let _guard = span.enter();
    info!(
        candidate = %redact_value(&candidate.full_name()),
        threshold = config.similarity_threshold,
        "screening candidate"
    );

    let detector = DuplicateDetector::new(config);
    let warnings = detector
        .detect_in_store(&candidate, &store)
        .unwrap_or_else(|never| match never {});
    info!(warnings = warnings.len(), "detection complete");
    Ok(warnings)
}

fn detection_config(args: &DetectArgs) -> Result<DetectionConfig> {
    let mut config = match &args.config {
        Some(path) => DetectionConfig::load(path)
            .with_context(|| format!("load detection config {}", path.display()))?,
        None => DetectionConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config = config.with_similarity_threshold(threshold);
    }
    if let Some(max_candidates) = args.max_candidates {
        config = config.with_max_candidates(max_candidates);
    }
    config.validate().context("invalid detection settings")?;
    Ok(config)
}

fn candidate_from_args(args: &DetectArgs) -> CandidateRecord {
    let mut candidate =
        CandidateRecord::new(&args.first_name, &args.last_name, &args.external_id);
    if let Some(detail) = &args.detail {
        candidate = candidate.with_subject_detail(detail);
    }
    if let Some(organization_id) = &args.organization_id {
        candidate = candidate.with_organization_id(organization_id);
    }
    candidate
}
