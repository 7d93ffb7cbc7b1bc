//! DSReview CLI
//!
//! Command-line interface for reviewing question datasets

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "dsreview")]
#[command(about = "DSReview - browse, compare and label question datasets", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: commands::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Dataset statistics
    Stats(commands::stats::StatsArgs),
    /// List questions, filtered and paginated
    List(commands::list::ListArgs),
    /// Show one question with its answers and relationships
    Show(commands::show::ShowArgs),
    /// Word diff of two texts or two versions of a question
    Diff(commands::diff::DiffArgs),
    /// Record a verdict for a question
    Label(commands::label::LabelArgs),
    /// List recorded labels and labeling progress
    Labels(commands::label::LabelsArgs),
    /// Run the HTTP review server
    Serve(commands::serve::ServeArgs),
}

fn main() {
    let cli = Cli::parse();
    cli.global.init_logging();

    let result = match cli.command {
        Commands::Stats(args) => commands::stats::execute(&cli.global, args),
        Commands::List(args) => commands::list::execute(&cli.global, args),
        Commands::Show(args) => commands::show::execute(&cli.global, args),
        Commands::Diff(args) => commands::diff::execute(&cli.global, args),
        Commands::Label(args) => commands::label::execute(&cli.global, args),
        Commands::Labels(args) => commands::label::execute_list(&cli.global, args),
        Commands::Serve(args) => commands::serve::execute(&cli.global, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
