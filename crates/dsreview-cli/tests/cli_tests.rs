//! End-to-end tests of the `dsreview` binary against temp exports

mod common;

use std::fs;

#[test]
fn test_stats_prints_headline_counts() {
    let dir = common::data_dir();
    let out = common::stdout(&common::run(dir.path(), &["stats"]));

    assert!(out.contains("Total questions:     4"), "{out}");
    assert!(out.contains("Deleted questions:   2"));
    assert!(out.contains("Bulk-deleted:        2"));
    assert!(out.contains("Answer options:      3"));
}

#[test]
fn test_stats_detailed_lists_breakdown_and_clusters() {
    let dir = common::data_dir();
    let out = common::stdout(&common::run(dir.path(), &["stats", "--detailed"]));

    assert!(out.contains("Language:"));
    assert!(out.contains("  Language: en: 3"));
    assert!(out.contains("  2024-01-01T00:00:00Z (2 questions): q3, q4"));
}

#[test]
fn test_stats_export_writes_metric_csv() {
    let dir = common::data_dir();
    let target = dir.path().join("out").join("stats.csv");
    common::stdout(&common::run(
        dir.path(),
        &["stats", "--export", target.to_str().unwrap()],
    ));

    let csv = fs::read_to_string(&target).unwrap();
    assert!(csv.starts_with("Metric,Value,Category\n"));
    assert!(csv.contains("Total Questions,4,Basic Counts"));
}

#[test]
fn test_list_filters_by_status() {
    let dir = common::data_dir();
    let out = common::stdout(&common::run(dir.path(), &["list", "--status", "bulk"]));

    assert!(out.contains("q3  [bulk-deleted]"));
    assert!(out.contains("q4  [bulk-deleted]"));
    assert!(!out.contains("q1 "));
    assert!(out.contains("Page 1/1 (2 questions)"));
}

#[test]
fn test_list_rejects_unknown_status() {
    let dir = common::data_dir();
    let output = common::run(dir.path(), &["list", "--status", "archived"]);
    assert!(!output.status.success());
}

#[test]
fn test_show_prints_versions_and_answers() {
    let dir = common::data_dir();
    let out = common::stdout(&common::run(dir.path(), &["show", "q1"]));

    assert!(out.contains("ID:         q1"));
    assert!(out.contains("- Yes"));
    assert!(out.contains("→ q2"));
}

#[test]
fn test_show_unknown_question_fails() {
    let dir = common::data_dir();
    let output = common::run(dir.path(), &["show", "nope"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "{stderr}");
    assert!(stderr.contains("nope"));
}

#[test]
fn test_diff_of_two_texts() {
    let dir = common::data_dir();
    let out = common::stdout(&common::run(dir.path(), &["diff", "a b c", "a x c"]));
    assert_eq!(out.trim_end(), "a [-b-] {+x+} c");
}

#[test]
fn test_diff_of_versions() {
    let dir = common::data_dir();
    let out = common::stdout(&common::run(dir.path(), &["diff", "--versions", "q2", "q1"]));

    assert!(out.starts_with("--- q1 "), "{out}");
    assert!(out.contains("The cat [-sat.-] {+sat!+}"));
    assert!(!out.contains("Tip:"));
}

#[test]
fn test_diff_of_unrelated_versions_fails() {
    let dir = common::data_dir();
    let output = common::run(dir.path(), &["diff", "--versions", "q2", "q3"]);
    assert!(!output.status.success());
}

#[test]
fn test_labeling_flow() {
    let dir = common::data_dir();

    let out = common::stdout(&common::run(
        dir.path(),
        &["label", "q1", "pass", "--reasoning", "clear"],
    ));
    assert!(out.contains("✓ Label created for q1 (PASS)"));
    assert!(out.contains("Progress: 1/4 (25.0%)"));

    let out = common::stdout(&common::run(dir.path(), &["label", "q1", "FAIL"]));
    assert!(out.contains("✓ Label updated for q1 (FAIL)"));

    let out = common::stdout(&common::run(dir.path(), &["labels"]));
    assert!(out.contains("q1  FAIL"));
    assert!(out.contains("Labeled 1/4 (25.0%)"));

    let out = common::stdout(&common::run(dir.path(), &["labels", "--next"]));
    assert!(out.starts_with("q2  "));

    assert!(dir.path().join("judge_prompts.csv").exists());
}

#[test]
fn test_label_rejects_bad_input() {
    let dir = common::data_dir();

    let output = common::run(dir.path(), &["label", "q1", "MAYBE"]);
    assert!(!output.status.success());

    let output = common::run(dir.path(), &["label", "ghost", "PASS"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("judge_prompts.csv").exists());
}

#[test]
fn test_missing_export_fails() {
    let dir = common::data_dir();
    fs::remove_file(dir.path().join("AnswerOptions_04_11.csv")).unwrap();

    let output = common::run(dir.path(), &["stats"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_NOT_FOUND"), "{stderr}");
}

#[test]
fn test_config_file_sets_data_dir() {
    let dir = common::data_dir();
    let config = dir.path().join("dsreview.toml");
    fs::write(
        &config,
        format!("data_dir = {:?}\npage_size = 1\n", dir.path().to_str().unwrap()),
    )
    .unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_dsreview"))
        .current_dir(dir.path())
        .env_remove("DSREVIEW_DATA_DIR")
        .env_remove("DSREVIEW_LOG")
        .args(["--config", config.to_str().unwrap(), "list", "--page", "2"])
        .output()
        .unwrap();
    let out = common::stdout(&output);

    assert!(out.starts_with("q2  "), "{out}");
    assert!(out.contains("Page 2/4 (4 questions)"));
}
