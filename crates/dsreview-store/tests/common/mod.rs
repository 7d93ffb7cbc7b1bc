use dsreview_store::ReviewConfig;
use std::fs;
use tempfile::TempDir;

pub const QUESTIONS_CSV: &str = "\
ID,Question,Tip,Type,Difficulty,CourseId,IsPublished,Created,PreviousVersionId,Deleted,TopicId,OriginalVersionId,Language
q1,What is 2 + 2?,Count on your fingers,MultipleChoice,Easy,c1,true,2024-01-01T10:00:00Z,,,t1,,en
q2,What is 2 + 2 exactly?,,MultipleChoice,Easy,c1,false,2024-02-01T10:00:00Z,q1,,t1,q1,en
q3,\"Explain, briefly, gravity\",,FreeText,Hard,c2,true,\"March 3, 2024, 9:15 AM\",,2024-05-01T00:00:00Z,t2,,en
q4,Obsolete question,,free-text,Hard,c2,false,,,2024-05-01T00:00:00Z,t2,,de

";

pub const ANSWERS_CSV: &str = "\
ID,Answer → ID,Answer → Answer,Answer → QuestionId,Answer → IsCorrect
q1,a1,4,q1,true
q1,a2,5,q1,false
q2,a3,4,q2,true
,a4,Mass attracts mass,q3,true
ghost,a5,orphan,ghost,true
";

/// Temp data dir holding both exports; the label file is not created
#[allow(dead_code)]
pub fn data_dir() -> (TempDir, ReviewConfig) {
    let dir = TempDir::new().expect("Failed to create temp data directory");
    let config = ReviewConfig::default().with_data_dir(dir.path());
    fs::write(config.questions_path(), QUESTIONS_CSV).unwrap();
    fs::write(config.answers_path(), ANSWERS_CSV).unwrap();
    (dir, config)
}
