//! Wholesale loading of the question and answer exports

use dsreview_core::model::{coerce_bool, exact_text, optional_text};
use dsreview_core::{
    log_op_end, log_op_error, log_op_start, AnswerOption, QuestionRecord, QuestionType,
    ReviewDataset,
};
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Instant;

use crate::config::ReviewConfig;
use crate::errors::{csv_error, file_missing, io_error, Result};

/// One row of the question export, as exported
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuestionRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "Tip")]
    tip: String,
    #[serde(rename = "Type")]
    question_type: String,
    #[serde(rename = "Difficulty")]
    difficulty: String,
    #[serde(rename = "CourseId")]
    course_id: String,
    #[serde(rename = "IsPublished")]
    is_published: String,
    #[serde(rename = "Created")]
    created: String,
    #[serde(rename = "PreviousVersionId")]
    previous_version_id: String,
    #[serde(rename = "Deleted")]
    deleted: String,
    #[serde(rename = "TopicId")]
    topic_id: String,
    #[serde(rename = "OriginalVersionId")]
    original_version_id: String,
    #[serde(rename = "Language")]
    language: String,
}

impl From<QuestionRow> for QuestionRecord {
    fn from(row: QuestionRow) -> Self {
        QuestionRecord {
            id: row.id.trim().to_string(),
            text: row.question,
            tip: optional_text(&row.tip),
            question_type: QuestionType::parse(&row.question_type),
            difficulty: row.difficulty.trim().to_string(),
            course_id: row.course_id.trim().to_string(),
            topic_id: row.topic_id.trim().to_string(),
            is_published: coerce_bool(&row.is_published),
            created_at: optional_text(&row.created),
            deleted_at: exact_text(&row.deleted),
            previous_version_id: exact_text(&row.previous_version_id),
            original_version_id: optional_text(&row.original_version_id),
            language: row.language.trim().to_string(),
        }
    }
}

/// One row of the answer export; `ID` holds the owning question id
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnswerRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Answer → ID")]
    answer_id: String,
    #[serde(rename = "Answer → Answer")]
    answer: String,
    #[serde(rename = "Answer → QuestionId")]
    question_id: String,
    #[serde(rename = "Answer → IsCorrect")]
    is_correct: String,
}

impl From<AnswerRow> for AnswerOption {
    fn from(row: AnswerRow) -> Self {
        let question_id = optional_text(&row.id)
            .or_else(|| optional_text(&row.question_id))
            .unwrap_or_default();
        AnswerOption {
            answer_id: row.answer_id.trim().to_string(),
            question_id,
            text: row.answer,
            is_correct: coerce_bool(&row.is_correct),
        }
    }
}

fn open_required(op: &str, path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => file_missing(op, path),
        _ => io_error(op, e),
    })
}

fn read_rows<R, T>(op: &str, path: &Path) -> Result<Vec<T>>
where
    R: for<'de> Deserialize<'de>,
    T: From<R>,
{
    let file = open_required(op, path)?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize::<R>().enumerate() {
        match result {
            Ok(row) => rows.push(T::from(row)),
            Err(e) if e.is_io_error() => return Err(csv_error(op, e)),
            Err(e) => {
                tracing::warn!(op, row = line + 1, error = %e, "skipping malformed row");
            }
        }
    }
    Ok(rows)
}

/// Read the question export
///
/// # Errors
///
/// `NotFound` when the file does not exist, `Io` when it cannot be read
pub fn read_questions(path: &Path) -> Result<Vec<QuestionRecord>> {
    read_rows::<QuestionRow, QuestionRecord>("read_questions", path)
}

/// Read the answer export
///
/// # Errors
///
/// `NotFound` when the file does not exist, `Io` when it cannot be read
pub fn read_answers(path: &Path) -> Result<Vec<AnswerOption>> {
    read_rows::<AnswerRow, AnswerOption>("read_answers", path)
}

/// Load both exports and derive every relationship
///
/// # Errors
///
/// Either export missing or unreadable is fatal
pub fn load_dataset(config: &ReviewConfig) -> Result<ReviewDataset> {
    let started = Instant::now();
    log_op_start!("load_dataset", data_dir = %config.data_dir.display());

    let loaded = read_questions(&config.questions_path()).and_then(|questions| {
        read_answers(&config.answers_path()).map(|answers| (questions, answers))
    });

    match loaded {
        Ok((questions, answers)) => {
            let dataset = ReviewDataset::with_limits(questions, answers, config.cluster_limits());
            log_op_end!(
                "load_dataset",
                duration_ms = started.elapsed().as_millis() as u64,
                question_count = dataset.views().len(),
                answer_count = dataset.answers().len()
            );
            Ok(dataset)
        }
        Err(err) => {
            log_op_error!(
                "load_dataset",
                err,
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}
