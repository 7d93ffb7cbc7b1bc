use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

pub const QUESTIONS_CSV: &str = "\
ID,Question,Tip,Type,Difficulty,CourseId,IsPublished,Created,PreviousVersionId,Deleted,TopicId,OriginalVersionId,Language
q1,The cat sat.,Think of pets,MultipleChoice,Easy,c1,true,2024-01-01T10:00:00Z,,,t1,,en
q2,The cat sat!,Think of pets,MultipleChoice,Easy,c1,true,2024-02-01T10:00:00Z,q1,,t1,q1,en
q3,Old question,,FreeText,Hard,c1,false,2023-01-01T10:00:00Z,,2024-01-01T00:00:00Z,t1,,en
q4,Older question,,FreeText,Hard,c1,false,2023-01-01T10:00:00Z,,2024-01-01T00:00:00Z,t1,,de
";

pub const ANSWERS_CSV: &str = "\
ID,Answer → ID,Answer → Answer,Answer → QuestionId,Answer → IsCorrect
q1,a1,Yes,q1,true
q1,a2,No,q1,false
q3,a3,Because,q3,true
";

/// Temp directory holding both exports; the label file is not created
pub fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp data directory");
    fs::write(dir.path().join("QuestionsGenerated_04_11.csv"), QUESTIONS_CSV).unwrap();
    fs::write(dir.path().join("AnswerOptions_04_11.csv"), ANSWERS_CSV).unwrap();
    dir
}

/// Run the CLI against `dir` with no config file
pub fn run(dir: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_dsreview");
    let config = dir.join("absent.toml");
    Command::new(cli_bin)
        .current_dir(dir)
        .env_remove("DSREVIEW_LOG")
        .args(["--config", config.to_str().unwrap()])
        .args(["--data-dir", dir.to_str().unwrap()])
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

pub fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
