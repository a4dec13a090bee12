//! Integration tests for CLI rendering.

use intake_cli::report::{
    code_rows, identifier_rows, validation_table, warnings_json, warnings_table,
};
use intake_model::{ExistingRecord, SimilarityBreakdown, Warning};

fn sample_warnings() -> Vec<Warning> {
    let exact = ExistingRecord::new("rec-3", "Michael", "Smith", "MRN100234");
    let similar = ExistingRecord::new("rec-1", "Mikey", "Smith", "MRN100235");
    let breakdown = SimilarityBreakdown {
        first_name_score: 1.0,
        last_name_score: 0.75,
        identifier_score: 0.5,
        total_score: 0.8,
    };
    vec![
        Warning::duplicate_exact(&exact),
        Warning::similar_record(&similar, breakdown),
    ]
}

#[test]
fn warnings_render_as_json() {
    let json = warnings_json(&sample_warnings()).expect("render json");
    insta::assert_snapshot!(json, @r#"
    [
      {
        "kind": "DUPLICATE_EXACT",
        "severity": "high",
        "message": "record rec-3 already uses identifier 'MRN100234'",
        "referencedRecordId": "rec-3"
      },
      {
        "kind": "SIMILAR_RECORD",
        "severity": "medium",
        "message": "record rec-1 looks similar (80% match)",
        "referencedRecordId": "rec-1",
        "score": 0.8,
        "breakdown": {
          "firstNameScore": 1.0,
          "lastNameScore": 0.75,
          "identifierScore": 0.5,
          "totalScore": 0.8
        }
      }
    ]
    "#);
}

#[test]
fn empty_warning_list_is_empty_json_array() {
    assert_eq!(warnings_json(&[]).expect("render json"), "[]");
}

#[test]
fn warnings_table_lists_kinds_and_records() {
    let rendered = warnings_table(&sample_warnings()).to_string();
    assert!(rendered.contains("DUPLICATE_EXACT"));
    assert!(rendered.contains("SIMILAR_RECORD"));
    assert!(rendered.contains("rec-1"));
    assert!(rendered.contains("0.800"));
}

#[test]
fn validation_table_shows_status_and_errors() {
    let rows = identifier_rows(&["1234567893".to_string(), "12345".to_string()]);
    let rendered = validation_table(&rows).to_string();
    assert!(rendered.contains("123-456-7893"));
    assert!(rendered.contains("valid"));
    assert!(rendered.contains("invalid"));
    assert!(rendered.contains("must be exactly 10 digits"));
}

#[test]
fn code_rows_report_chapter_errors() {
    let rows = code_rows(&["E11.9".to_string(), "U07.1".to_string()]);
    assert!(rows[0].is_valid());
    assert!(!rows[1].is_valid());
    assert_eq!(rows[1].formatted, "U07.1");
}
