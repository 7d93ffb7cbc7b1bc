//! The loaded dataset with every derived relationship attached

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

use crate::diff::{compare_versions, VersionComparison};
use crate::errors::{ReviewError, Result};
use crate::model::{AnswerOption, QuestionRecord};
use crate::relations::{
    self, bulk_delete, BulkDeleteCluster, BulkDeleteInfo, ClusterLimits, QuestionIndex,
    VersionCycle, VersionEdge,
};
use crate::stats::{self, DatasetBreakdown, Stats};
use crate::{log_op_end, log_op_error, log_op_start};

/// A question as served to reviewers: the record, its answers, and what was
/// derived about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    #[serde(flatten)]
    pub question: QuestionRecord,
    pub answers: Vec<AnswerOption>,
    pub versions: Vec<VersionEdge>,
    pub is_deleted: bool,
    pub is_bulk_delete: bool,
    pub bulk_delete_info: Option<BulkDeleteInfo>,
    pub version_cycle: Option<VersionCycle>,
}

impl QuestionView {
    pub fn id(&self) -> &str {
        &self.question.id
    }

    pub fn correct_answers(&self) -> impl Iterator<Item = &AnswerOption> {
        self.answers.iter().filter(|a| a.is_correct)
    }

    pub fn incorrect_answers(&self) -> impl Iterator<Item = &AnswerOption> {
        self.answers.iter().filter(|a| !a.is_correct)
    }
}

/// Immutable dataset snapshot; relationships are derived once in [`ReviewDataset::new`]
#[derive(Debug, Clone, Default)]
pub struct ReviewDataset {
    index: QuestionIndex,
    answers: Vec<AnswerOption>,
    views: Vec<QuestionView>,
    view_by_id: HashMap<String, usize>,
}

impl ReviewDataset {
    pub fn new(questions: Vec<QuestionRecord>, answers: Vec<AnswerOption>) -> Self {
        Self::with_limits(questions, answers, ClusterLimits::default())
    }

    pub fn with_limits(
        questions: Vec<QuestionRecord>,
        answers: Vec<AnswerOption>,
        limits: ClusterLimits,
    ) -> Self {
        let started = Instant::now();
        log_op_start!(
            "build_dataset",
            question_count = questions.len(),
            answer_count = answers.len()
        );

        let index = QuestionIndex::build(questions);
        let derived = relations::derive_all(&index, limits);

        // Answers whose question id matches no record are kept for counts only
        let mut grouped: HashMap<&str, Vec<AnswerOption>> = HashMap::new();
        for answer in &answers {
            grouped
                .entry(answer.question_id.as_str())
                .or_default()
                .push(answer.clone());
        }

        let views: Vec<QuestionView> = index
            .questions()
            .iter()
            .map(|question| {
                let rel = derived.get(&question.id).cloned().unwrap_or_default();
                QuestionView {
                    question: question.clone(),
                    answers: grouped.get(question.id.as_str()).cloned().unwrap_or_default(),
                    versions: rel.versions,
                    is_deleted: question.is_deleted(),
                    is_bulk_delete: rel.bulk_delete.is_some(),
                    bulk_delete_info: rel.bulk_delete,
                    version_cycle: rel.cycle,
                }
            })
            .collect();

        let view_by_id = views
            .iter()
            .enumerate()
            .map(|(pos, view)| (view.question.id.clone(), pos))
            .collect();

        log_op_end!(
            "build_dataset",
            duration_ms = started.elapsed().as_millis() as u64
        );

        Self {
            index,
            answers,
            views,
            view_by_id,
        }
    }

    pub fn index(&self) -> &QuestionIndex {
        &self.index
    }

    pub fn answers(&self) -> &[AnswerOption] {
        &self.answers
    }

    /// All views in dataset order
    pub fn views(&self) -> &[QuestionView] {
        &self.views
    }

    pub fn view(&self, id: &str) -> Option<&QuestionView> {
        self.view_by_id.get(id).map(|&pos| &self.views[pos])
    }

    /// Every answer row naming `id`, whether or not such a question exists
    pub fn answers_for(&self, id: &str) -> Vec<AnswerOption> {
        self.answers
            .iter()
            .filter(|a| a.question_id == id)
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> Stats {
        stats::compute_stats(&self.index, &self.answers)
    }

    pub fn breakdown(&self) -> DatasetBreakdown {
        stats::breakdown(&self.index, &self.answers)
    }

    pub fn clusters(&self) -> Vec<BulkDeleteCluster> {
        bulk_delete::clusters(&self.index)
    }

    /// Compare a question with one version from its chain
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` when `id` is unknown
    /// - `VersionNotInChain` when `version_id` is not related to `id`
    pub fn compare(&self, id: &str, version_id: &str) -> Result<VersionComparison> {
        let started = Instant::now();
        log_op_start!("compare_versions", question_id = id);

        let result = self.view(id).ok_or_else(|| ReviewError::QuestionNotFound {
            question_id: id.to_string(),
        });
        let result = result.and_then(|view| {
            view.versions
                .iter()
                .find(|edge| edge.id == version_id)
                .map(|edge| compare_versions(&view.question, edge))
                .ok_or_else(|| ReviewError::VersionNotInChain {
                    question_id: id.to_string(),
                    version_id: version_id.to_string(),
                })
        });

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(cmp) => {
                log_op_end!(
                    "compare_versions",
                    duration_ms = duration_ms,
                    token_count = cmp.text_diff.len()
                );
            }
            Err(err) => {
                log_op_error!("compare_versions", *err, duration_ms = duration_ms);
            }
        }
        result
    }
}
