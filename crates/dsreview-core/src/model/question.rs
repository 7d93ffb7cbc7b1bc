use serde::{Deserialize, Serialize};

/// Question format
///
/// Exports spell the type inconsistently (`MultipleChoice`, `multiple-choice`,
/// `FREE_TEXT`), so parsing ignores case and separators. Unrecognised values
/// are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    FreeText,
    Other(String),
}

impl QuestionType {
    pub fn parse(raw: &str) -> Self {
        let folded: String = raw
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "multiplechoice" => QuestionType::MultipleChoice,
            "freetext" => QuestionType::FreeText,
            _ => QuestionType::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::MultipleChoice => "MultipleChoice",
            QuestionType::FreeText => "FreeText",
            QuestionType::Other(raw) => raw,
        }
    }

    pub fn is_free_text(&self) -> bool {
        matches!(self, QuestionType::FreeText)
    }
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::Other(String::new())
    }
}

impl From<String> for QuestionType {
    fn from(raw: String) -> Self {
        QuestionType::parse(&raw)
    }
}

impl From<QuestionType> for String {
    fn from(value: QuestionType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the question export
///
/// Timestamps are kept as the raw exported strings: bulk-delete clustering
/// compares them byte for byte, and display parsing happens in `dates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: String,
    pub text: String,
    pub tip: Option<String>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: String,
    pub course_id: String,
    pub topic_id: String,
    pub is_published: bool,
    pub created_at: Option<String>,
    pub deleted_at: Option<String>,
    pub previous_version_id: Option<String>,
    pub original_version_id: Option<String>,
    pub language: String,
}

impl QuestionRecord {
    /// Create a published-false, undeleted record with only id and text set
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            tip: None,
            question_type: QuestionType::default(),
            difficulty: String::new(),
            course_id: String::new(),
            topic_id: String::new(),
            is_published: false,
            created_at: None,
            deleted_at: None,
            previous_version_id: None,
            original_version_id: None,
            language: String::new(),
        }
    }

    pub fn with_previous_version(mut self, previous_id: impl Into<String>) -> Self {
        self.previous_version_id = Some(previous_id.into());
        self
    }

    pub fn with_deleted_at(mut self, deleted_at: impl Into<String>) -> Self {
        self.deleted_at = Some(deleted_at.into());
        self
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn has_previous_version(&self) -> bool {
        self.previous_version_id.is_some()
    }
}
