use dsreview_core::{AnswerOption, QuestionRecord, QuestionType, ReviewDataset};

pub const BULK_TS: &str = "2024-01-01T00:00:00Z";

/// A -> B -> C plus an unrelated record
#[allow(dead_code)]
pub fn linear_chain() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new("A", "What is the boiling point of water"),
        QuestionRecord::new("B", "What is the boiling point of water?").with_previous_version("A"),
        QuestionRecord::new("C", "At sea level, what is the boiling point of water?")
            .with_previous_version("B"),
        QuestionRecord::new("X", "Unrelated question"),
    ]
}

/// Three records deleted at the same instant, one deleted alone, one live
#[allow(dead_code)]
pub fn bulk_cluster() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new("d1", "First removed").with_deleted_at(BULK_TS),
        QuestionRecord::new("live", "Still here"),
        QuestionRecord::new("d2", "Second removed").with_deleted_at(BULK_TS),
        QuestionRecord::new("solo", "Removed alone").with_deleted_at("2024-06-01T12:00:00Z"),
        QuestionRecord::new("d3", "Third removed").with_deleted_at(BULK_TS),
    ]
}

/// A small labeled-review dataset with both question types
#[allow(dead_code)]
pub fn review_dataset() -> ReviewDataset {
    let mut mc = QuestionRecord::new("mc1", "Which planet is largest?");
    mc.question_type = QuestionType::MultipleChoice;
    mc.difficulty = "Easy".to_string();
    mc.is_published = true;

    let mut ft = QuestionRecord::new("ft1", "Explain photosynthesis");
    ft.question_type = QuestionType::FreeText;
    ft.difficulty = "Hard".to_string();

    let mut ft2 = QuestionRecord::new("ft2", "Explain photosynthesis briefly")
        .with_previous_version("ft1")
        .with_deleted_at(BULK_TS);
    ft2.question_type = QuestionType::FreeText;
    ft2.difficulty = "Hard".to_string();

    let gone = QuestionRecord::new("gone", "Obsolete").with_deleted_at(BULK_TS);

    ReviewDataset::new(
        vec![mc, ft, ft2, gone],
        vec![
            AnswerOption::new("a1", "mc1", "Mars", false),
            AnswerOption::new("a2", "mc1", "Jupiter", true),
            AnswerOption::new("a3", "ft1", "Plants convert light into chemical energy", true),
        ],
    )
}
