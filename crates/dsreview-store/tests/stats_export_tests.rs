#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use dsreview_store::export::export_metrics;
use dsreview_store::load_dataset;
use std::fs;

#[test]
fn test_export_writes_breakdown_rows() {
    let (dir, config) = common::data_dir();
    let dataset = load_dataset(&config).unwrap();
    let target = dir.path().join("dataset_statistics.csv");

    export_metrics(&target, &dataset.breakdown().metric_rows()).unwrap();

    let text = fs::read_to_string(&target).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Metric,Value,Category"));
    assert_eq!(lines.next(), Some("Total Questions,4,Basic Counts"));
    assert!(text.contains("Language: en,3,Language"));
    assert!(text.contains("Type: FreeText,2,Question Type"));
    assert!(text.contains("Questions with 2 answers,1,Answer Distribution"));
}
