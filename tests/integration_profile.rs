//! Integration tests for the full profiling workflow.
//!
//! These tests run the complete file-to-report pipeline on fixture files
//! and verify the end-to-end results.

use adstat::profile::profile_file;
use adstat::render;
use std::path::Path;

#[test]
fn test_profile_ads_fixture() {
    let response = profile_file(Path::new("testdata/ads.csv"), b',', 1)
        .expect("Profiling should succeed for the ads fixture");

    assert_eq!(response.row_count, 3, "Should have 3 data rows");
    assert_eq!(response.column_count, 6, "Should have 6 header columns");
    assert_eq!(response.file_name, "ads.csv");

    let report = &response.report;

    // Plain numeric column
    let id = report.numeric.get("id").expect("id column");
    assert_eq!(id.count, 3);
    assert_eq!(id.min, 1001.0);
    assert_eq!(id.max, 1003.0);

    // All three reserved columns produced derived numeric sub-fields
    let imp_lower = report
        .numeric
        .get("impressions_lower")
        .expect("impressions_lower column");
    assert_eq!(imp_lower.count, 3);
    assert_eq!(imp_lower.mean, 300.0);
    assert_eq!(imp_lower.stdev, 200.0);
    assert_eq!(imp_lower.min, 100.0);
    assert_eq!(imp_lower.max, 500.0);

    let imp_upper = report
        .numeric
        .get("impressions_upper")
        .expect("impressions_upper column");
    assert_eq!(imp_upper.max, 600.0);

    // Audience size only expanded on the two rows that carried a payload
    let aud_lower = report
        .numeric
        .get("estimated_audience_size_lower")
        .expect("estimated_audience_size_lower column");
    assert_eq!(aud_lower.count, 2);
    assert_eq!(aud_lower.mean, 3000.0);

    // Spend row 2 is malformed: no derived fields from that row
    let spend_lower = report.numeric.get("spend_lower").expect("spend_lower column");
    assert_eq!(spend_lower.count, 2);
    assert_eq!(spend_lower.min, 0.0);
    assert_eq!(spend_lower.max, 100.0);

    // Categorical side
    let platform = report.categorical.get("platform").expect("platform column");
    assert_eq!(platform.unique, 2);
    assert_eq!(platform.top, Some(("fb".to_owned(), 2)));

    let region = report.categorical.get("region").expect("region column");
    assert_eq!(region.top, Some(("US".to_owned(), 2)));

    // Raw reserved cells stay part of the record and degrade to text:
    // two payloads plus one empty cell for the audience column
    let aud_raw = report
        .categorical
        .get("estimated_audience_size")
        .expect("raw audience payloads");
    assert_eq!(aud_raw.unique, 3);
}

#[test]
fn test_profile_clean_fixture() {
    let response = profile_file(Path::new("testdata/clean.csv"), b',', 2)
        .expect("Profiling should succeed for the clean fixture");

    let value = response.report.numeric.get("value").expect("value column");
    assert_eq!(value.count, 3);
    assert_eq!(value.mean, 20.0);
    assert_eq!(value.stdev, 10.0);

    let label = response
        .report
        .categorical
        .get("label")
        .expect("label column");
    assert_eq!(label.unique, 2);
    assert_eq!(label.top_values.len(), 2);
    assert_eq!(label.top_values.first(), Some(&("a".to_owned(), 2)));
}

#[test]
fn test_rendered_outputs_agree_with_report() {
    let response = profile_file(Path::new("testdata/ads.csv"), b',', 1).expect("profile");

    let text = render::render_text(&response.report);
    assert!(text.contains("Numeric columns:"));
    assert!(text.contains("impressions_lower"));
    assert!(text.contains("top=\"fb\""));

    let json = render::render_json(&response.report).expect("render json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["numeric"]["impressions_lower"]["count"], 3);
    assert_eq!(
        value["categorical"]["platform"]["top"],
        serde_json::json!(["fb", 2])
    );
}

#[test]
fn test_padded_reserved_header_still_expands() {
    let response = profile_file(Path::new("testdata/padded_header.csv"), b',', 1)
        .expect("Profiling should succeed for the padded-header fixture");

    let lower = response
        .report
        .numeric
        .get("impressions_lower")
        .expect("padded 'impressions ' header should still expand");
    assert_eq!(lower.count, 2);
    assert_eq!(lower.min, 100.0);
    assert_eq!(lower.max, 300.0);

    let platform = response
        .report
        .categorical
        .get("platform")
        .expect("platform column");
    assert_eq!(platform.unique, 2);
}

#[test]
fn test_empty_file_returns_error() {
    let result = profile_file(Path::new("testdata/empty.csv"), b',', 1);
    assert!(result.is_err(), "File with no header should return error");
}

#[test]
fn test_nonexistent_file_returns_error() {
    let result = profile_file(Path::new("testdata/does_not_exist.csv"), b',', 1);
    let err = result.err().expect("Non-existent file should return error");
    assert!(
        err.to_string().contains("does_not_exist.csv"),
        "Error should name the offending path: {err}"
    );
}

#[test]
fn test_profile_duration_recorded() {
    let response = profile_file(Path::new("testdata/clean.csv"), b',', 1).expect("profile");
    assert!(response.duration.as_nanos() > 0, "Duration should be recorded");
}
