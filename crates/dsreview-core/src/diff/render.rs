use serde::{Deserialize, Serialize};

use crate::diff::engine::render_diff;
use crate::diff::model::{DiffKind, DiffToken};
use crate::model::QuestionRecord;
use crate::relations::{VersionDirection, VersionEdge};

/// Token texts joined by single spaces
pub fn render_plain(tokens: &[DiffToken]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Terminal rendering: `[-removed-]` and `{+added+}`, single-space joined
pub fn render_marked(tokens: &[DiffToken]) -> String {
    tokens
        .iter()
        .map(|t| match t.kind {
            DiffKind::Unchanged => t.text.clone(),
            DiffKind::Removed => format!("[-{}-]", t.text),
            DiffKind::Added => format!("{{+{}+}}", t.text),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A question compared with one of its related versions, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionComparison {
    pub before_id: String,
    pub after_id: String,
    pub before_created_at: Option<String>,
    pub after_created_at: Option<String>,
    pub text_diff: Vec<DiffToken>,
    pub tip_changed: bool,
    pub before_tip: Option<String>,
    pub after_tip: Option<String>,
    /// Diff of the tips when both versions carry one
    pub tip_diff: Option<Vec<DiffToken>>,
}

impl VersionComparison {
    pub fn text_changed(&self) -> bool {
        self.text_diff.iter().any(DiffToken::is_change)
    }
}

/// Diff `current` against a version from its chain
///
/// An ancestor is the older side; a descendant is the newer side.
pub fn compare_versions(current: &QuestionRecord, edge: &VersionEdge) -> VersionComparison {
    struct Side<'a> {
        id: &'a str,
        created_at: &'a Option<String>,
        text: &'a str,
        tip: &'a Option<String>,
    }

    let current_side = Side {
        id: &current.id,
        created_at: &current.created_at,
        text: &current.text,
        tip: &current.tip,
    };
    let edge_side = Side {
        id: &edge.id,
        created_at: &edge.created_at,
        text: &edge.text,
        tip: &edge.tip,
    };
    let (before, after) = match edge.direction {
        VersionDirection::Previous => (edge_side, current_side),
        VersionDirection::Next => (current_side, edge_side),
    };

    let tip_diff = match (before.tip, after.tip) {
        (Some(old), Some(new)) if old != new => Some(render_diff(old, new)),
        _ => None,
    };

    VersionComparison {
        before_id: before.id.to_string(),
        after_id: after.id.to_string(),
        before_created_at: before.created_at.clone(),
        after_created_at: after.created_at.clone(),
        text_diff: render_diff(before.text, after.text),
        tip_changed: before.tip != after.tip,
        before_tip: before.tip.clone(),
        after_tip: after.tip.clone(),
        tip_diff,
    }
}
