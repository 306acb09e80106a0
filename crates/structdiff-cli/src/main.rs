//! structdiff CLI
//!
//! Compares and renders JSON documents.
//!
//! Exit status: 0 when the documents are equal (or a render succeeded),
//! 1 when differences were found, 2 on any error.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use structdiff_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "structdiff")]
#[command(about = "structdiff - Structural comparison of JSON documents", long_about = None)]
struct Cli {
    /// TOML configuration file; command-line flags take precedence
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep mapping entries in document order instead of sorting by key
    #[arg(long, global = true)]
    no_sort_keys: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two documents and report every difference
    Diff(commands::diff::DiffArgs),
    /// Print the canonical rendering of a document
    Render(commands::render::RenderArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        logging_facility::init(Profile::Development);
    }

    let result = commands::load_config(cli.config.as_deref(), cli.no_sort_keys).and_then(
        |config| match cli.command {
            Commands::Diff(args) => commands::diff::execute(args, &config),
            Commands::Render(args) => commands::render::execute(args, &config),
        },
    );

    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(commands::EXIT_ERROR)
        }
    }
}
