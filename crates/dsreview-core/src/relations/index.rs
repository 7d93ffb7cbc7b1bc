use std::collections::HashMap;

use crate::dates;
use crate::model::QuestionRecord;

/// Owned question set with the lookups the relationship walks need
///
/// Built once per dataset load:
/// - id → position
/// - previous-version id → successor positions, in dataset order
/// - exact `deleted_at` string → positions, in deletion-time order
#[derive(Debug, Clone, Default)]
pub struct QuestionIndex {
    questions: Vec<QuestionRecord>,
    by_id: HashMap<String, usize>,
    successors: HashMap<String, Vec<usize>>,
    deletion_order: Vec<usize>,
    deletion_groups: HashMap<String, Vec<usize>>,
}

impl QuestionIndex {
    pub fn build(questions: Vec<QuestionRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(questions.len());
        let mut successors: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, question) in questions.iter().enumerate() {
            // Last occurrence wins for duplicated ids
            by_id.insert(question.id.clone(), pos);
            if let Some(prev) = &question.previous_version_id {
                successors.entry(prev.clone()).or_default().push(pos);
            }
        }

        let mut deletion_order: Vec<usize> = questions
            .iter()
            .enumerate()
            .filter(|(_, q)| q.is_deleted())
            .map(|(pos, _)| pos)
            .collect();
        // Stable: ties keep dataset order
        deletion_order.sort_by_key(|&pos| dates::sort_key(questions[pos].deleted_at.as_deref()));

        let mut deletion_groups: HashMap<String, Vec<usize>> = HashMap::new();
        for &pos in &deletion_order {
            if let Some(deleted_at) = &questions[pos].deleted_at {
                deletion_groups
                    .entry(deleted_at.clone())
                    .or_default()
                    .push(pos);
            }
        }

        Self {
            questions,
            by_id,
            successors,
            deletion_order,
            deletion_groups,
        }
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&QuestionRecord> {
        self.position(id).map(|pos| &self.questions[pos])
    }

    pub fn at(&self, pos: usize) -> &QuestionRecord {
        &self.questions[pos]
    }

    /// Positions of records whose `previous_version_id` equals `id`
    pub fn successors(&self, id: &str) -> &[usize] {
        self.successors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Deleted record positions, oldest deletion first
    pub fn deletion_order(&self) -> &[usize] {
        &self.deletion_order
    }

    /// Positions of every record deleted at exactly `deleted_at`
    pub fn deletion_group(&self, deleted_at: &str) -> &[usize] {
        self.deletion_groups
            .get(deleted_at)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
