//! Curricula CLI
//!
//! Command-line interface over JSON curriculum documents

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use curricula_core::logging_facility;

mod commands;
mod settings;

use settings::CliSettings;

#[derive(Debug, Parser)]
#[command(name = "curricula")]
#[command(about = "Curricula - inspect textbook curriculum trees", long_about = None)]
struct Cli {
    /// Settings file (default: ./curricula.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Chapter, lesson, topic and subtopic counts plus total duration
    Stats(commands::stats::StatsArgs),
    /// Render the curriculum to Markdown
    Outline(commands::outline::OutlineArgs),
    /// Keyword search across titles, descriptions and keywords
    Search(commands::search::SearchArgs),
    /// Breadcrumb path from the textbook to a node
    Path(commands::path::PathArgs),
    /// Pre-order list of every node with its path and depth
    Flatten(commands::flatten::FlattenArgs),
    /// Check a document against the structural and curriculum invariants
    Validate(commands::validate::ValidateArgs),
}

fn main() {
    let cli = Cli::parse();

    let settings = match CliSettings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    logging_facility::init(settings.log_profile);

    let result = match cli.command {
        Commands::Stats(args) => commands::stats::execute(args, &settings),
        Commands::Outline(args) => commands::outline::execute(args, &settings),
        Commands::Search(args) => commands::search::execute(args, &settings),
        Commands::Path(args) => commands::path::execute(args, &settings),
        Commands::Flatten(args) => commands::flatten::execute(args, &settings),
        Commands::Validate(args) => commands::validate::execute(args, &settings),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
