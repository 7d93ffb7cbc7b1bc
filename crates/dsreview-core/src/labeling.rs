//! Manual labeling workflow: submission validation, question snapshots,
//! judge prompts and the walk over unlabeled questions

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Write as _;

use crate::dataset::QuestionView;
use crate::errors::{ReviewError, Result};
use crate::model::{Label, LabelRecord, PassFail};

/// A label as submitted by a reviewer, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSubmission {
    /// Absent, `null` and blank all count as missing
    #[serde(default)]
    pub question_id: Option<String>,
    #[serde(default)]
    pub pass_fail: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl LabelSubmission {
    pub fn new(question_id: impl Into<String>, pass_fail: impl Into<String>) -> Self {
        Self {
            question_id: Some(question_id.into()),
            pass_fail: Some(pass_fail.into()),
            reasoning: None,
        }
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    /// # Errors
    ///
    /// - `MissingField` when the question id or verdict is blank
    /// - `InvalidPassFail` when the verdict is not PASS, FAIL or UNKNOWN
    pub fn validate(&self) -> Result<Label> {
        let question_id = required(self.question_id.as_deref(), "questionId")?;
        let pass_fail = required(self.pass_fail.as_deref(), "passFail")?;

        Ok(Label {
            question_id: question_id.to_string(),
            pass_fail: pass_fail.parse()?,
            reasoning: self.reasoning.clone().unwrap_or_default(),
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ReviewError::MissingField {
            field: field.to_string(),
        })
}

/// Question, tip and answers as one block of review text
pub fn format_question_text(view: &QuestionView) -> String {
    let mut text = format!("Question: {}\n", view.question.text);
    if let Some(tip) = &view.question.tip {
        let _ = writeln!(text, "Tip: {}", tip);
    }

    text.push_str("\nCorrect Answer(s):\n");
    text.push_str(&bullet_list(view.correct_answers().map(|a| a.text.as_str())));

    let incorrect = bullet_list(view.incorrect_answers().map(|a| a.text.as_str()));
    if !incorrect.is_empty() {
        text.push_str("\n\nIncorrect Answer(s):\n");
        text.push_str(&incorrect);
    }
    text
}

fn bullet_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Spreadsheet-style option letter: A..Z, then AA, AB, ...
fn option_letter(idx: usize) -> String {
    let mut n = idx + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Evaluation prompt for an LLM judge
///
/// Free-text questions show their first answer as the reference answer;
/// other questions list every option with its correctness.
pub fn judge_prompt(view: &QuestionView, reasoning: Option<&str>, label: Option<PassFail>) -> String {
    let q = &view.question;
    let mut prompt = format!("Question: {}\n", q.text);
    if let Some(tip) = &q.tip {
        let _ = writeln!(prompt, "Tip: {}", tip);
    }
    let _ = write!(
        prompt,
        "Type: {}\nDifficulty: {}\n\n",
        q.question_type, q.difficulty
    );

    if q.question_type.is_free_text() {
        let reference = view.answers.first().map(|a| a.text.as_str()).unwrap_or("N/A");
        let _ = write!(prompt, "Correct Answer:\n{}", reference);
    } else {
        prompt.push_str("Answer Options:\n");
        let options: Vec<String> = view
            .answers
            .iter()
            .enumerate()
            .map(|(idx, a)| {
                let marker = if a.is_correct {
                    "[CORRECT ANSWER]"
                } else {
                    "[INCORRECT ANSWER]"
                };
                format!("{}. {} {}", option_letter(idx), a.text, marker)
            })
            .collect();
        prompt.push_str(&options.join("\n"));
    }

    if let Some(reasoning) = reasoning.filter(|r| !r.trim().is_empty()) {
        let _ = write!(prompt, "\n\nReasoning: {}", reasoning);
    }
    if let Some(label) = label {
        let _ = write!(prompt, "\nLabel: {}", label);
    }
    prompt
}

/// Build the persisted record for a first label on `view`
pub fn snapshot_label(view: &QuestionView, label: &Label, created: impl Into<String>) -> LabelRecord {
    LabelRecord {
        question_id: label.question_id.clone(),
        question_text: format_question_text(view),
        question_type: view.question.question_type.as_str().to_string(),
        difficulty: view.question.difficulty.clone(),
        is_deleted: view.is_deleted,
        has_previous_version: view.question.has_previous_version(),
        is_published: view.question.is_published,
        judge_prompt: judge_prompt(view, Some(&label.reasoning), Some(label.pass_fail)),
        evaluation_criteria: String::new(),
        pass_fail: label.pass_fail,
        reasoning: label.reasoning.clone(),
        created: created.into(),
    }
}

/// Position of the first unlabeled view strictly after `after`, or from the
/// start when `after` is `None`
pub fn next_unlabeled(views: &[QuestionView], labels: &[Label], after: Option<usize>) -> Option<usize> {
    let labeled: HashSet<&str> = labels.iter().map(|l| l.question_id.as_str()).collect();
    let start = after.map_or(0, |pos| pos + 1);
    views
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, v)| !labeled.contains(v.id()))
        .map(|(pos, _)| pos)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelProgress {
    pub labeled: usize,
    pub total: usize,
    pub percent: f64,
}

/// Labeled share of the dataset; labels for unknown questions are ignored
pub fn progress(views: &[QuestionView], labels: &[Label]) -> LabelProgress {
    let labeled_ids: HashSet<&str> = labels.iter().map(|l| l.question_id.as_str()).collect();
    let labeled = views.iter().filter(|v| labeled_ids.contains(v.id())).count();
    let total = views.len();
    let percent = if total == 0 {
        0.0
    } else {
        labeled as f64 * 100.0 / total as f64
    };
    LabelProgress {
        labeled,
        total,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ReviewDataset;
    use crate::model::{AnswerOption, QuestionRecord, QuestionType};

    fn dataset() -> ReviewDataset {
        let mut mc = QuestionRecord::new("mc", "Pick the prime");
        mc.question_type = QuestionType::MultipleChoice;
        mc.difficulty = "Easy".to_string();
        mc.tip = Some("Only one".to_string());
        let mut ft = QuestionRecord::new("ft", "Define a prime");
        ft.question_type = QuestionType::FreeText;

        ReviewDataset::new(
            vec![mc, ft, QuestionRecord::new("bare", "No answers")],
            vec![
                AnswerOption::new("a1", "mc", "4", false),
                AnswerOption::new("a2", "mc", "7", true),
                AnswerOption::new("a3", "ft", "Divisible only by 1 and itself", true),
            ],
        )
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        assert_eq!(
            LabelSubmission::new("", "PASS").validate(),
            Err(ReviewError::MissingField {
                field: "questionId".to_string()
            })
        );
        assert_eq!(
            LabelSubmission::new("q1", " ").validate(),
            Err(ReviewError::MissingField {
                field: "passFail".to_string()
            })
        );
        assert!(matches!(
            LabelSubmission::new("q1", "MAYBE").validate(),
            Err(ReviewError::InvalidPassFail { .. })
        ));
    }

    #[test]
    fn test_null_fields_are_missing() {
        let submission: LabelSubmission =
            serde_json::from_str(r#"{"questionId": "q1", "passFail": null}"#).unwrap();
        assert_eq!(
            submission.validate(),
            Err(ReviewError::MissingField {
                field: "passFail".to_string()
            })
        );

        let submission: LabelSubmission = serde_json::from_str(r#"{"passFail": "PASS"}"#).unwrap();
        assert_eq!(
            submission.validate(),
            Err(ReviewError::MissingField {
                field: "questionId".to_string()
            })
        );
    }

    #[test]
    fn test_validate_normalizes() {
        let label = LabelSubmission::new(" q1 ", "fail").validate().unwrap();
        assert_eq!(label.question_id, "q1");
        assert_eq!(label.pass_fail, PassFail::Fail);
        assert_eq!(label.reasoning, "");
    }

    #[test]
    fn test_format_question_text() {
        let ds = dataset();
        assert_eq!(
            format_question_text(ds.view("mc").unwrap()),
            "Question: Pick the prime\nTip: Only one\n\nCorrect Answer(s):\n- 7\n\nIncorrect Answer(s):\n- 4"
        );
        assert_eq!(
            format_question_text(ds.view("bare").unwrap()),
            "Question: No answers\n\nCorrect Answer(s):\n"
        );
    }

    #[test]
    fn test_judge_prompt_multiple_choice() {
        let ds = dataset();
        let prompt = judge_prompt(ds.view("mc").unwrap(), Some("clear"), Some(PassFail::Pass));
        assert_eq!(
            prompt,
            "Question: Pick the prime\nTip: Only one\nType: MultipleChoice\nDifficulty: Easy\n\n\
             Answer Options:\nA. 4 [INCORRECT ANSWER]\nB. 7 [CORRECT ANSWER]\n\n\
             Reasoning: clear\nLabel: PASS"
        );
    }

    #[test]
    fn test_judge_prompt_free_text() {
        let ds = dataset();
        let prompt = judge_prompt(ds.view("ft").unwrap(), None, None);
        assert!(prompt.ends_with("Correct Answer:\nDivisible only by 1 and itself"));

        let bare = judge_prompt(ds.view("bare").unwrap(), Some("  "), None);
        assert!(bare.contains("Answer Options:\n"));
        assert!(!bare.contains("Reasoning"));
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(option_letter(0), "A");
        assert_eq!(option_letter(25), "Z");
        assert_eq!(option_letter(26), "AA");
    }

    #[test]
    fn test_walk_and_progress() {
        let ds = dataset();
        let labels = vec![Label {
            question_id: "mc".to_string(),
            pass_fail: PassFail::Pass,
            reasoning: String::new(),
        }];

        assert_eq!(next_unlabeled(ds.views(), &labels, None), Some(1));
        assert_eq!(next_unlabeled(ds.views(), &labels, Some(1)), Some(2));
        assert_eq!(next_unlabeled(ds.views(), &labels, Some(2)), None);

        let p = progress(ds.views(), &labels);
        assert_eq!((p.labeled, p.total), (1, 3));
    }
}
