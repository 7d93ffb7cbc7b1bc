//! The label file: one row per labeled question
//!
//! Read wholesale on open, rewritten wholesale (temp file then rename) on
//! every change. Rows are kept verbatim, so rows this tool cannot interpret
//! survive a rewrite untouched.

use dsreview_core::dates;
use dsreview_core::labeling::{self, LabelSubmission};
use dsreview_core::model::coerce_bool;
use dsreview_core::{
    log_op_end, log_op_error, log_op_start, Label, LabelRecord, PassFail, ReviewDataset,
    ReviewError,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::atomic::atomic_write;
use crate::errors::{csv_error, io_error, Result};

/// Label file row with its on-disk column names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelRow {
    pub question_id: String,
    pub question_text: String,
    #[serde(rename = "Type")]
    pub question_type: String,
    pub difficulty: String,
    pub is_deleted: String,
    pub has_previous_version: String,
    pub is_published: String,
    pub judge_prompt: String,
    pub evaluation_criteria: String,
    pub pass_fail: String,
    pub reasoning: String,
    pub created: String,
}

impl LabelRow {
    /// Listed rows carry both a question id and a verdict
    fn is_listed(&self) -> bool {
        !self.question_id.is_empty() && !self.pass_fail.is_empty()
    }

    fn record(&self) -> Option<LabelRecord> {
        if !self.is_listed() {
            return None;
        }
        let pass_fail: PassFail = self.pass_fail.parse().ok()?;
        Some(LabelRecord {
            question_id: self.question_id.clone(),
            question_text: self.question_text.clone(),
            question_type: self.question_type.clone(),
            difficulty: self.difficulty.clone(),
            is_deleted: coerce_bool(&self.is_deleted),
            has_previous_version: coerce_bool(&self.has_previous_version),
            is_published: coerce_bool(&self.is_published),
            judge_prompt: self.judge_prompt.clone(),
            evaluation_criteria: self.evaluation_criteria.clone(),
            pass_fail,
            reasoning: self.reasoning.clone(),
            created: self.created.clone(),
        })
    }
}

impl From<&LabelRecord> for LabelRow {
    fn from(record: &LabelRecord) -> Self {
        let flag = |value: bool| value.to_string();
        Self {
            question_id: record.question_id.clone(),
            question_text: record.question_text.clone(),
            question_type: record.question_type.clone(),
            difficulty: record.difficulty.clone(),
            is_deleted: flag(record.is_deleted),
            has_previous_version: flag(record.has_previous_version),
            is_published: flag(record.is_published),
            judge_prompt: record.judge_prompt.clone(),
            evaluation_criteria: record.evaluation_criteria.clone(),
            pass_fail: record.pass_fail.as_str().to_string(),
            reasoning: record.reasoning.clone(),
            created: record.created.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    Created,
    Updated,
}

#[derive(Debug)]
pub struct LabelStore {
    path: PathBuf,
    rows: Vec<LabelRow>,
}

impl LabelStore {
    /// Open the label file; a missing file is an empty store
    ///
    /// # Errors
    ///
    /// `Io` when the file exists but cannot be read, `Serialization` when it
    /// is not CSV
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let rows = match fs::read(&path) {
            Ok(bytes) => parse_rows(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(io_error("open_labels", e)),
        };
        tracing::debug!(path = %path.display(), rows = rows.len(), "label file opened");
        Ok(Self { path, rows })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> &[LabelRow] {
        &self.rows
    }

    /// Judgments of every listed row, file order
    pub fn labels(&self) -> Vec<Label> {
        self.records().iter().map(LabelRecord::label).collect()
    }

    /// Listed rows with a recognisable verdict
    pub fn records(&self) -> Vec<LabelRecord> {
        self.rows.iter().filter_map(LabelRow::record).collect()
    }

    pub fn get(&self, question_id: &str) -> Option<LabelRecord> {
        self.rows
            .iter()
            .find(|row| row.question_id == question_id)
            .and_then(LabelRow::record)
    }

    /// Insert or overwrite the label of one question, then rewrite the file
    ///
    /// An existing row keeps its snapshot; only the verdict, reasoning and
    /// judge prompt change. A new row snapshots the question from `dataset`.
    ///
    /// # Errors
    ///
    /// - `MissingField` / `InvalidInput` for an invalid submission
    /// - `NotFound` for a first label on a question not in `dataset`
    /// - `Io` when the file cannot be written; the store is then unchanged
    pub fn upsert(
        &mut self,
        submission: &LabelSubmission,
        dataset: &ReviewDataset,
    ) -> Result<UpsertOutcome> {
        let started = Instant::now();
        log_op_start!("upsert_label", question_id = submission.question_id.as_deref().unwrap_or_default());

        let result = self.apply_upsert(submission, dataset);
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(outcome) => {
                log_op_end!("upsert_label", duration_ms = duration_ms, outcome = ?outcome);
            }
            Err(err) => {
                log_op_error!("upsert_label", *err, duration_ms = duration_ms);
            }
        }
        result
    }

    fn apply_upsert(
        &mut self,
        submission: &LabelSubmission,
        dataset: &ReviewDataset,
    ) -> Result<UpsertOutcome> {
        let label = submission.validate()?;
        let view = dataset.view(&label.question_id);

        let mut rows = self.rows.clone();
        let outcome = match rows.iter_mut().find(|row| row.question_id == label.question_id) {
            Some(row) => {
                row.pass_fail = label.pass_fail.as_str().to_string();
                row.reasoning = label.reasoning.clone();
                if let Some(view) = view {
                    row.judge_prompt = labeling::judge_prompt(
                        view,
                        Some(&label.reasoning),
                        Some(label.pass_fail),
                    );
                }
                UpsertOutcome::Updated
            }
            None => {
                let view = view.ok_or_else(|| ReviewError::QuestionNotFound {
                    question_id: label.question_id.clone(),
                })?;
                let record = labeling::snapshot_label(view, &label, dates::now_rfc3339());
                rows.push(LabelRow::from(&record));
                UpsertOutcome::Created
            }
        };

        atomic_write(&self.path, &encode_rows(&rows)?)?;
        self.rows = rows;
        Ok(outcome)
    }
}

fn parse_rows(bytes: &[u8]) -> Result<Vec<LabelRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(bytes);
    reader
        .deserialize::<LabelRow>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| csv_error("parse_labels", e))
}

fn encode_rows(rows: &[LabelRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| csv_error("encode_labels", e))?;
    }
    writer
        .into_inner()
        .map_err(|e| io_error("encode_labels", e.into_error()))
}
