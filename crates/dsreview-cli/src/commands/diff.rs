//! Diff command
//!
//! Usage:
//!   dsreview diff <BEFORE> <AFTER>
//!   dsreview diff --versions <ID> <VERSION_ID>

use clap::Args;
use dsreview_core::dates::display_timestamp;
use dsreview_core::diff::render_marked;
use dsreview_core::render_diff;

use super::{CmdResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Treat the arguments as a question ID and a version from its chain
    #[arg(long)]
    pub versions: bool,

    /// Older text, or the question ID with --versions
    pub first: String,

    /// Newer text, or the version ID with --versions
    pub second: String,

    /// Print the diff tokens as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute diff command
pub fn execute(global: &GlobalArgs, args: DiffArgs) -> CmdResult {
    if !args.versions {
        let tokens = render_diff(&args.first, &args.second);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        } else {
            println!("{}", render_marked(&tokens));
        }
        return Ok(());
    }

    let (_, dataset) = global.dataset()?;
    let comparison = dataset.compare(&args.first, &args.second)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!(
        "--- {} ({})",
        comparison.before_id,
        display_timestamp(comparison.before_created_at.as_deref())
    );
    println!(
        "+++ {} ({})",
        comparison.after_id,
        display_timestamp(comparison.after_created_at.as_deref())
    );
    if comparison.text_changed() {
        println!("{}", render_marked(&comparison.text_diff));
    } else {
        println!("Question text unchanged");
    }

    if comparison.tip_changed {
        match &comparison.tip_diff {
            Some(tokens) => println!("Tip: {}", render_marked(tokens)),
            None => println!(
                "Tip: {} => {}",
                comparison.before_tip.as_deref().unwrap_or("(none)"),
                comparison.after_tip.as_deref().unwrap_or("(none)")
            ),
        }
    }

    Ok(())
}
