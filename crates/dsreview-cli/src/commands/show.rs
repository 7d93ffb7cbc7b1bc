//! Show command
//!
//! Usage: dsreview show <ID> [--json]

use clap::Args;
use dsreview_core::dates::display_timestamp;
use dsreview_core::labeling::format_question_text;
use dsreview_core::relations::VersionDirection;
use dsreview_core::{ExError, ReviewError};
use dsreview_store::LabelStore;

use super::{one_line, CmdResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Question ID
    pub id: String,

    /// Print the question view as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute show command
pub fn execute(global: &GlobalArgs, args: ShowArgs) -> CmdResult {
    let (config, dataset) = global.dataset()?;
    let view = dataset.view(&args.id).ok_or_else(|| {
        ExError::from(ReviewError::QuestionNotFound {
            question_id: args.id.clone(),
        })
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    let question = &view.question;
    println!("ID:         {}", question.id);
    println!("Type:       {}", question.question_type.as_str());
    println!("Difficulty: {}", question.difficulty);
    println!("Language:   {}", question.language);
    println!("Published:  {}", if question.is_published { "yes" } else { "no" });
    println!("Created:    {}", display_timestamp(question.created_at.as_deref()));
    if view.is_deleted {
        println!("Deleted:    {}", display_timestamp(question.deleted_at.as_deref()));
    }
    println!();
    println!("{}", format_question_text(view));

    if !view.versions.is_empty() {
        println!("\nVersions:");
        for edge in &view.versions {
            let arrow = match edge.direction {
                VersionDirection::Previous => "←",
                VersionDirection::Next => "→",
            };
            println!(
                "  {} {} ({}) {}",
                arrow,
                edge.id,
                display_timestamp(edge.created_at.as_deref()),
                one_line(&edge.text, 60)
            );
        }
    }
    if let Some(cycle) = &view.version_cycle {
        println!("  ! version pointers loop back at {}", cycle.at_id);
    }

    if let Some(info) = &view.bulk_delete_info {
        println!("\nDeleted together with {} other question(s):", info.count);
        for member in &info.members {
            println!("  {}  {}", member.id, one_line(&member.preview, 60));
        }
        if info.count > info.members.len() {
            println!("  … and {} more", info.count - info.members.len());
        }
    }

    let labels = LabelStore::open(config.labels_path())?;
    if let Some(label) = labels.get(view.id()) {
        println!("\nLabel: {}", label.pass_fail);
        if !label.reasoning.is_empty() {
            println!("Reasoning: {}", label.reasoning);
        }
    }

    Ok(())
}
