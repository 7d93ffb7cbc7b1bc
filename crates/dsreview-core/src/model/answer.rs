use serde::{Deserialize, Serialize};

/// One answer option belonging to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    /// Unique within its question
    pub answer_id: String,
    pub question_id: String,
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(
        answer_id: impl Into<String>,
        question_id: impl Into<String>,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Self {
        Self {
            answer_id: answer_id.into(),
            question_id: question_id.into(),
            text: text.into(),
            is_correct,
        }
    }
}
