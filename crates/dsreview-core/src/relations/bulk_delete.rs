//! Bulk-delete clustering
//!
//! Records deleted at exactly the same instant (identical `deleted_at`
//! strings, no time window) are presumed to have been deleted together.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::index::QuestionIndex;

/// Caps applied when listing cluster companions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterLimits {
    pub max_members: usize,
    pub preview_chars: usize,
}

impl Default for ClusterLimits {
    fn default() -> Self {
        Self {
            max_members: 10,
            preview_chars: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteMember {
    pub id: String,
    pub preview: String,
}

/// Cluster membership as seen from one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteInfo {
    pub deleted_at: String,
    /// Number of *other* records sharing the timestamp (cluster size − 1)
    pub count: usize,
    /// At most `max_members` companions, in dataset order
    pub members: Vec<BulkDeleteMember>,
}

/// A whole cluster, used for chronological listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteCluster {
    pub deleted_at: String,
    pub member_ids: Vec<String>,
}

/// First `max_chars` characters of `text`
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

/// Cluster membership of `id`, or `None` when it is live, unknown, or the
/// only record deleted at its timestamp
pub fn bulk_delete_info(
    index: &QuestionIndex,
    id: &str,
    limits: ClusterLimits,
) -> Option<BulkDeleteInfo> {
    let pos = index.position(id)?;
    let deleted_at = index.at(pos).deleted_at.as_deref()?;

    let companions: Vec<usize> = index
        .deletion_group(deleted_at)
        .iter()
        .copied()
        .filter(|&other| other != pos)
        .collect();
    if companions.is_empty() {
        return None;
    }

    Some(BulkDeleteInfo {
        deleted_at: deleted_at.to_string(),
        count: companions.len(),
        members: companions
            .iter()
            .take(limits.max_members)
            .map(|&other| {
                let record = index.at(other);
                BulkDeleteMember {
                    id: record.id.clone(),
                    preview: preview(&record.text, limits.preview_chars),
                }
            })
            .collect(),
    })
}

/// True when `id` shares its deletion timestamp with at least one other record
pub fn is_bulk_deleted(index: &QuestionIndex, id: &str) -> bool {
    index
        .position(id)
        .and_then(|pos| index.at(pos).deleted_at.as_deref())
        .is_some_and(|deleted_at| index.deletion_group(deleted_at).len() >= 2)
}

/// All clusters of two or more records, oldest deletion first
pub fn clusters(index: &QuestionIndex) -> Vec<BulkDeleteCluster> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();

    for &pos in index.deletion_order() {
        let Some(deleted_at) = index.at(pos).deleted_at.as_deref() else {
            continue;
        };
        if !seen.insert(deleted_at) {
            continue;
        }

        let group = index.deletion_group(deleted_at);
        if group.len() >= 2 {
            out.push(BulkDeleteCluster {
                deleted_at: deleted_at.to_string(),
                member_ids: group.iter().map(|&p| index.at(p).id.clone()).collect(),
            });
        }
    }

    out
}
