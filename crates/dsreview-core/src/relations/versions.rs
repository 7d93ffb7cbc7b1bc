//! Version chain reconstruction
//!
//! Records form a forest through `previous_version_id`: one backward pointer
//! per record, any number of forward successors. A chain lists every
//! ancestor (nearest first, walking toward the root) and then every
//! descendant in depth-first pre-order, successors in dataset order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::index::QuestionIndex;
use crate::model::QuestionRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionDirection {
    /// Ancestor reached through `previous_version_id`
    Previous,
    /// Descendant whose pointer chain leads back to this record
    Next,
}

/// One related version of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEdge {
    pub id: String,
    pub created_at: Option<String>,
    pub text: String,
    pub tip: Option<String>,
    pub direction: VersionDirection,
}

impl VersionEdge {
    fn from_record(record: &QuestionRecord, direction: VersionDirection) -> Self {
        Self {
            id: record.id.clone(),
            created_at: record.created_at.clone(),
            text: record.text.clone(),
            tip: record.tip.clone(),
            direction,
        }
    }

    pub fn is_next(&self) -> bool {
        self.direction == VersionDirection::Next
    }
}

/// Where a version walk found a record it had already visited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionCycle {
    pub at_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionChain {
    /// Ancestors first, then descendants
    pub edges: Vec<VersionEdge>,
    /// Set when the walk stopped on a repeated record
    pub cycle: Option<VersionCycle>,
}

impl VersionChain {
    pub fn ancestors(&self) -> impl Iterator<Item = &VersionEdge> {
        self.edges.iter().filter(|e| !e.is_next())
    }

    pub fn descendants(&self) -> impl Iterator<Item = &VersionEdge> {
        self.edges.iter().filter(|e| e.is_next())
    }
}

/// Compute the version chain of `id`
///
/// Unknown ids yield an empty chain. A pointer to a missing record ends the
/// backward walk silently. Publication and deletion status never exclude a
/// record.
pub fn version_chain(index: &QuestionIndex, id: &str) -> VersionChain {
    let Some(start) = index.position(id) else {
        return VersionChain::default();
    };

    let mut visited = HashSet::from([start]);
    let mut chain = VersionChain::default();

    let mut pointer = index.at(start).previous_version_id.as_deref();
    while let Some(prev_id) = pointer {
        let Some(pos) = index.position(prev_id) else {
            break;
        };
        if !visited.insert(pos) {
            chain.cycle = Some(VersionCycle {
                at_id: prev_id.to_string(),
            });
            break;
        }
        let record = index.at(pos);
        chain
            .edges
            .push(VersionEdge::from_record(record, VersionDirection::Previous));
        pointer = record.previous_version_id.as_deref();
    }

    // Explicit stack; successors pushed in reverse so they pop in dataset order
    let mut stack: Vec<usize> = index
        .successors(&index.at(start).id)
        .iter()
        .rev()
        .copied()
        .collect();
    while let Some(pos) = stack.pop() {
        let record = index.at(pos);
        if !visited.insert(pos) {
            chain.cycle.get_or_insert_with(|| VersionCycle {
                at_id: record.id.clone(),
            });
            continue;
        }
        chain
            .edges
            .push(VersionEdge::from_record(record, VersionDirection::Next));
        stack.extend(index.successors(&record.id).iter().rev().copied());
    }

    if let Some(cycle) = &chain.cycle {
        tracing::warn!(
            question_id = id,
            cycle_at = cycle.at_id.as_str(),
            "previous-version pointers form a cycle; version walk stopped"
        );
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(edges: impl Iterator<Item = &'a VersionEdge>) -> Vec<&'a str> {
        edges.map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_single_record_has_empty_chain() {
        let index = QuestionIndex::build(vec![QuestionRecord::new("a", "A")]);
        let chain = version_chain(&index, "a");

        assert!(chain.edges.is_empty());
        assert!(chain.cycle.is_none());
    }

    #[test]
    fn test_unknown_id_yields_empty_chain() {
        let index = QuestionIndex::build(vec![QuestionRecord::new("a", "A")]);
        assert_eq!(version_chain(&index, "missing"), VersionChain::default());
    }

    #[test]
    fn test_middle_of_chain() {
        let index = QuestionIndex::build(vec![
            QuestionRecord::new("a", "A"),
            QuestionRecord::new("b", "B").with_previous_version("a"),
            QuestionRecord::new("c", "C").with_previous_version("b"),
        ]);
        let chain = version_chain(&index, "b");

        assert_eq!(ids(chain.ancestors()), vec!["a"]);
        assert_eq!(ids(chain.descendants()), vec!["c"]);
    }

    #[test]
    fn test_dangling_pointer_stops_silently() {
        let index = QuestionIndex::build(vec![
            QuestionRecord::new("b", "B").with_previous_version("gone"),
            QuestionRecord::new("c", "C").with_previous_version("b"),
        ]);
        let chain = version_chain(&index, "c");

        assert_eq!(ids(chain.ancestors()), vec!["b"]);
        assert!(chain.cycle.is_none());
    }

    #[test]
    fn test_branching_descendants_are_depth_first() {
        // a -> b -> d, a -> c
        let index = QuestionIndex::build(vec![
            QuestionRecord::new("a", "A"),
            QuestionRecord::new("b", "B").with_previous_version("a"),
            QuestionRecord::new("c", "C").with_previous_version("a"),
            QuestionRecord::new("d", "D").with_previous_version("b"),
        ]);
        let chain = version_chain(&index, "a");

        assert_eq!(ids(chain.descendants()), vec!["b", "d", "c"]);
    }

    #[test]
    fn test_two_record_cycle_terminates() {
        let index = QuestionIndex::build(vec![
            QuestionRecord::new("a", "A").with_previous_version("b"),
            QuestionRecord::new("b", "B").with_previous_version("a"),
        ]);
        let chain = version_chain(&index, "a");

        assert_eq!(ids(chain.ancestors()), vec!["b"]);
        assert_eq!(
            chain.cycle,
            Some(VersionCycle {
                at_id: "a".to_string()
            })
        );
        assert!(chain.edges.iter().all(|e| e.id != "a"));
    }

    #[test]
    fn test_self_pointer_is_a_cycle() {
        let index =
            QuestionIndex::build(vec![QuestionRecord::new("a", "A").with_previous_version("a")]);
        let chain = version_chain(&index, "a");

        assert!(chain.edges.is_empty());
        assert!(chain.cycle.is_some());
    }
}
