//! Label commands
//!
//! Usage:
//!   dsreview label <ID> <PASS|FAIL|UNKNOWN> [--reasoning <TEXT>]
//!   dsreview labels [--next] [--json]

use clap::Args;
use dsreview_core::labeling::{self, LabelSubmission};
use dsreview_store::{LabelStore, UpsertOutcome};

use super::{one_line, CmdResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct LabelArgs {
    /// Question ID
    pub id: String,

    /// PASS, FAIL or UNKNOWN
    pub verdict: String,

    /// Free-text justification
    #[arg(short, long)]
    pub reasoning: Option<String>,
}

#[derive(Debug, Args)]
pub struct LabelsArgs {
    /// Print the next unlabeled question instead of the label list
    #[arg(long)]
    pub next: bool,

    /// Print the labels as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute label command
pub fn execute(global: &GlobalArgs, args: LabelArgs) -> CmdResult {
    let (config, dataset) = global.dataset()?;
    let mut store = LabelStore::open(config.labels_path())?;

    let mut submission = LabelSubmission::new(args.id, args.verdict);
    if let Some(reasoning) = args.reasoning {
        submission = submission.with_reasoning(reasoning);
    }
    let outcome = store.upsert(&submission, &dataset)?;
    let label = submission.validate()?;

    let verb = match outcome {
        UpsertOutcome::Created => "created",
        UpsertOutcome::Updated => "updated",
    };
    println!(
        "✓ Label {} for {} ({})",
        verb,
        label.question_id, label.pass_fail
    );

    let progress = labeling::progress(dataset.views(), &store.labels());
    println!(
        "Progress: {}/{} ({:.1}%)",
        progress.labeled, progress.total, progress.percent
    );
    Ok(())
}

/// Execute labels command
pub fn execute_list(global: &GlobalArgs, args: LabelsArgs) -> CmdResult {
    let (config, dataset) = global.dataset()?;
    let store = LabelStore::open(config.labels_path())?;
    let labels = store.labels();

    if args.next {
        match labeling::next_unlabeled(dataset.views(), &labels, None) {
            Some(pos) => {
                let view = &dataset.views()[pos];
                println!("{}  {}", view.id(), one_line(&view.question.text, 80));
            }
            None => println!("All questions are labeled"),
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&labels)?);
        return Ok(());
    }

    for label in &labels {
        if label.reasoning.is_empty() {
            println!("{}  {}", label.question_id, label.pass_fail);
        } else {
            println!(
                "{}  {}  {}",
                label.question_id,
                label.pass_fail,
                one_line(&label.reasoning, 60)
            );
        }
    }
    let progress = labeling::progress(dataset.views(), &labels);
    println!(
        "\nLabeled {}/{} ({:.1}%)",
        progress.labeled, progress.total, progress.percent
    );
    Ok(())
}
