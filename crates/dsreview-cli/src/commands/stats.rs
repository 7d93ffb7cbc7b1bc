//! Stats command
//!
//! Usage: dsreview stats [--detailed] [--export <CSV>] [--json]

use clap::Args;
use dsreview_store::export::export_metrics;
use std::path::PathBuf;

use super::{CmdResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Include the per-attribute breakdown and bulk-delete clusters
    #[arg(long)]
    pub detailed: bool,

    /// Write the breakdown as a Metric,Value,Category CSV
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Print the headline counts as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute stats command
pub fn execute(global: &GlobalArgs, args: StatsArgs) -> CmdResult {
    let (_, dataset) = global.dataset()?;
    let stats = dataset.stats();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Total questions:     {}", stats.total_questions);
        println!("Deleted questions:   {}", stats.deleted_questions);
        println!("Bulk-deleted:        {}", stats.bulk_deletes);
        println!("Published questions: {}", stats.published_questions);
        println!("Answer options:      {}", stats.total_answers);
    }

    if !args.detailed && args.export.is_none() {
        return Ok(());
    }

    let rows = dataset.breakdown().metric_rows();

    if args.detailed {
        let mut category = "";
        for row in &rows {
            if row.category != category {
                category = row.category.as_str();
                println!("\n{}:", category);
            }
            println!("  {}: {}", row.metric, row.value);
        }

        let clusters = dataset.clusters();
        if !clusters.is_empty() {
            println!("\nBulk deletes:");
            for cluster in &clusters {
                println!(
                    "  {} ({} questions): {}",
                    cluster.deleted_at,
                    cluster.member_ids.len(),
                    cluster.member_ids.join(", ")
                );
            }
        }
    }

    if let Some(path) = &args.export {
        export_metrics(path, &rows)?;
        println!("✓ Exported {} metrics to {}", rows.len(), path.display());
    }

    Ok(())
}
