//! Dataset statistics: headline counts and the per-attribute breakdown

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::model::AnswerOption;
use crate::relations::{bulk_delete, QuestionIndex};

/// Headline counts shown above the question list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_questions: usize,
    pub deleted_questions: usize,
    /// Records belonging to a bulk-delete cluster
    pub bulk_deletes: usize,
    pub published_questions: usize,
    pub total_answers: usize,
}

pub fn compute_stats(index: &QuestionIndex, answers: &[AnswerOption]) -> Stats {
    let questions = index.questions();
    Stats {
        total_questions: questions.len(),
        deleted_questions: questions.iter().filter(|q| q.is_deleted()).count(),
        bulk_deletes: index
            .deletion_order()
            .iter()
            .filter(|&&pos| bulk_delete::is_bulk_deleted(index, &index.at(pos).id))
            .count(),
        published_questions: questions.iter().filter(|q| q.is_published).count(),
        total_answers: answers.len(),
    }
}

/// One value of an attribute and how many questions carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub value: String,
    pub count: usize,
}

/// One row of the exported statistics table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricRow {
    pub metric: String,
    pub value: String,
    pub category: String,
}

impl MetricRow {
    fn new(metric: impl Into<String>, value: impl ToString, category: &str) -> Self {
        Self {
            metric: metric.into(),
            value: value.to_string(),
            category: category.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetBreakdown {
    pub total_questions: usize,
    pub total_answers: usize,
    /// Mean answer count over questions that have at least one answer
    pub average_answers_per_question: f64,
    /// (answer count, number of questions with that many answers), ascending
    pub answer_distribution: Vec<(usize, usize)>,
    pub by_published: Vec<Tally>,
    pub by_deleted: Vec<Tally>,
    pub by_language: Vec<Tally>,
    pub by_type: Vec<Tally>,
    pub by_difficulty: Vec<Tally>,
    pub by_previous_version: Vec<Tally>,
}

/// Most frequent first; ties by value
fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<Tally> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut out: Vec<Tally> = counts
        .into_iter()
        .map(|(value, count)| Tally {
            value: value.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    out
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub fn breakdown(index: &QuestionIndex, answers: &[AnswerOption]) -> DatasetBreakdown {
    let questions = index.questions();

    let mut per_question: HashMap<&str, usize> = HashMap::new();
    for answer in answers {
        *per_question.entry(answer.question_id.as_str()).or_default() += 1;
    }
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &count in per_question.values() {
        *distribution.entry(count).or_default() += 1;
    }
    let average = if per_question.is_empty() {
        0.0
    } else {
        answers.len() as f64 / per_question.len() as f64
    };

    DatasetBreakdown {
        total_questions: questions.len(),
        total_answers: answers.len(),
        average_answers_per_question: average,
        answer_distribution: distribution.into_iter().collect(),
        by_published: tally(questions.iter().map(|q| flag(q.is_published))),
        by_deleted: tally(questions.iter().map(|q| flag(q.is_deleted()))),
        by_language: tally(questions.iter().map(|q| q.language.as_str())),
        by_type: tally(questions.iter().map(|q| q.question_type.as_str())),
        by_difficulty: tally(questions.iter().map(|q| q.difficulty.as_str())),
        by_previous_version: tally(questions.iter().map(|q| flag(q.has_previous_version()))),
    }
}

impl DatasetBreakdown {
    /// Flatten into `Metric,Value,Category` rows
    pub fn metric_rows(&self) -> Vec<MetricRow> {
        let mut rows = vec![
            MetricRow::new("Total Questions", self.total_questions, "Basic Counts"),
            MetricRow::new("Total Answer Options", self.total_answers, "Basic Counts"),
            MetricRow::new(
                "Average Answers per Question",
                format!("{:.2}", self.average_answers_per_question),
                "Basic Counts",
            ),
        ];
        for (answers, questions) in &self.answer_distribution {
            rows.push(MetricRow::new(
                format!("Questions with {answers} answers"),
                questions,
                "Answer Distribution",
            ));
        }

        let sections: [(&str, &str, &[Tally]); 6] = [
            ("Published", "Published Status", &self.by_published),
            ("Deleted", "Deleted Status", &self.by_deleted),
            ("Language", "Language", &self.by_language),
            ("Type", "Question Type", &self.by_type),
            ("Difficulty", "Difficulty", &self.by_difficulty),
            ("Has Previous Version", "Version Status", &self.by_previous_version),
        ];
        for (label, category, tallies) in sections {
            for t in tallies {
                rows.push(MetricRow::new(
                    format!("{label}: {}", t.value),
                    t.count,
                    category,
                ));
            }
        }
        rows
    }
}
