//! List command
//!
//! Usage: dsreview list [--status <STATUS>] [--difficulty <D>] [--search <TEXT>] [--page <N>]

use clap::Args;
use dsreview_core::{paginate, QuestionFilter, QuestionView, StatusFilter};

use super::{one_line, CmdResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// all, deleted, bulk, published or unpublished
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Exact difficulty
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Case-insensitive text search
    #[arg(long)]
    pub search: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Questions per page (default: `page_size` from the config)
    #[arg(long)]
    pub per_page: Option<usize>,
}

fn flags(view: &QuestionView) -> String {
    let mut flags = Vec::new();
    if view.is_bulk_delete {
        flags.push("bulk-deleted".to_string());
    } else if view.is_deleted {
        flags.push("deleted".to_string());
    }
    if view.question.is_published {
        flags.push("published".to_string());
    }
    if !view.versions.is_empty() {
        flags.push(format!("{} versions", view.versions.len()));
    }
    flags.join(", ")
}

/// Execute list command
pub fn execute(global: &GlobalArgs, args: ListArgs) -> CmdResult {
    let (config, dataset) = global.dataset()?;

    let filter = QuestionFilter {
        status: args.status,
        difficulty: args.difficulty,
        search: args.search,
    };
    let page = paginate(
        filter.apply(dataset.views()),
        args.page.saturating_sub(1),
        args.per_page.unwrap_or(config.page_size),
    );

    if page.items.is_empty() {
        println!("No questions match");
        return Ok(());
    }

    for view in &page.items {
        println!(
            "{}  [{}] {}",
            view.id(),
            flags(view),
            one_line(&view.question.text, 80)
        );
    }
    println!(
        "\nPage {}/{} ({} questions)",
        page.page + 1,
        page.total_pages,
        page.total_items
    );

    Ok(())
}
