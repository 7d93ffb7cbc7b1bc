#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use dsreview_core::labeling::{self, LabelSubmission};
use dsreview_core::{paginate, PassFail, QuestionFilter, StatusFilter};

#[test]
fn test_bulk_filter_uses_derived_flags() {
    let dataset = common::review_dataset();
    let filter = QuestionFilter {
        status: StatusFilter::Bulk,
        ..Default::default()
    };

    let ids: Vec<_> = filter.apply(dataset.views()).iter().map(|v| v.id()).collect();
    assert_eq!(ids, vec!["ft2", "gone"]);
}

#[test]
fn test_filtered_results_paginate() {
    let dataset = common::review_dataset();
    let filter = QuestionFilter {
        difficulty: Some("Hard".to_string()),
        search: Some("PHOTOSYNTHESIS".to_string()),
        ..Default::default()
    };

    let page = paginate(filter.apply(dataset.views()), 0, 1);
    assert_eq!(page.total_items, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items[0].id(), "ft1");
    assert!(page.has_next());
}

#[test]
fn test_first_label_snapshot_captures_question_state() {
    let dataset = common::review_dataset();
    let label = LabelSubmission::new("ft2", "FAIL")
        .with_reasoning("Answer missing")
        .validate()
        .unwrap();

    let view = dataset.view("ft2").unwrap();
    let record = labeling::snapshot_label(view, &label, "2024-07-01T00:00:00.000Z");

    assert_eq!(record.pass_fail, PassFail::Fail);
    assert!(record.is_deleted);
    assert!(record.has_previous_version);
    assert!(!record.is_published);
    assert_eq!(record.question_type, "FreeText");
    assert!(record.judge_prompt.contains("Correct Answer:\nN/A"));
    assert!(record.judge_prompt.ends_with("Reasoning: Answer missing\nLabel: FAIL"));
    assert_eq!(record.evaluation_criteria, "");
}

#[test]
fn test_labeling_walk_visits_every_unlabeled_question() {
    let dataset = common::review_dataset();
    let mut labels = Vec::new();
    let mut cursor = labeling::next_unlabeled(dataset.views(), &labels, None);

    while let Some(pos) = cursor {
        let id = dataset.views()[pos].id().to_string();
        labels.push(LabelSubmission::new(id, "PASS").validate().unwrap());
        cursor = labeling::next_unlabeled(dataset.views(), &labels, Some(pos));
    }

    let progress = labeling::progress(dataset.views(), &labels);
    assert_eq!(progress.labeled, 4);
    assert!((progress.percent - 100.0).abs() < f64::EPSILON);
}
