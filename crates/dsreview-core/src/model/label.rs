use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ReviewError;

/// Reviewer verdict for one question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PassFail {
    Pass,
    Fail,
    Unknown,
}

impl PassFail {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassFail::Pass => "PASS",
            PassFail::Fail => "FAIL",
            PassFail::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for PassFail {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PASS" => Ok(PassFail::Pass),
            "FAIL" => Ok(PassFail::Fail),
            "UNKNOWN" => Ok(PassFail::Unknown),
            _ => Err(ReviewError::InvalidPassFail {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PassFail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The judgment part of a label, as listed back to reviewers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub question_id: String,
    pub pass_fail: PassFail,
    pub reasoning: String,
}

/// A persisted label: the judgment plus a snapshot of the question at label time
///
/// One record per question; relabeling updates the judgment in place and
/// never touches the snapshot fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecord {
    pub question_id: String,
    /// Question, tip and answers rendered as review text
    pub question_text: String,
    pub question_type: String,
    pub difficulty: String,
    pub is_deleted: bool,
    pub has_previous_version: bool,
    pub is_published: bool,
    pub judge_prompt: String,
    pub evaluation_criteria: String,
    pub pass_fail: PassFail,
    pub reasoning: String,
    /// RFC 3339 time of the first label submission
    pub created: String,
}

impl LabelRecord {
    pub fn label(&self) -> Label {
        Label {
            question_id: self.question_id.clone(),
            pass_fail: self.pass_fail,
            reasoning: self.reasoning.clone(),
        }
    }
}
