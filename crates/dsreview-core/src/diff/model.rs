use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Unchanged,
    Removed,
    Added,
}

/// One word of a diff, tagged with how it changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffToken {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffToken {
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Unchanged,
            text: text.into(),
        }
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Removed,
            text: text.into(),
        }
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Added,
            text: text.into(),
        }
    }

    pub fn is_change(&self) -> bool {
        self.kind != DiffKind::Unchanged
    }
}
