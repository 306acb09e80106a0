//! Diff command
//!
//! Usage: structdiff diff <EXPECTED> <ACTUAL> [--max-depth <N>] [--format text|json] [--title <TITLE>]

use super::{load_document, Outcome};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use structdiff_core::diff::{render_report, DiffReport};
use structdiff_core::{find_differences_with, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per difference
    Text,
    /// The report as pretty-printed JSON
    Json,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Expected document (JSON)
    pub expected: PathBuf,

    /// Actual document (JSON)
    pub actual: PathBuf,

    /// Report differing subtrees below this many levels as a single difference
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report title (default: "<EXPECTED> vs <ACTUAL>")
    #[arg(long)]
    pub title: Option<String>,
}

/// Execute diff command
pub fn execute(args: DiffArgs, config: &Config) -> anyhow::Result<Outcome> {
    let expected = load_document(&args.expected)?;
    let actual = load_document(&args.actual)?;

    let mut options = config.diff.clone();
    if let Some(max_depth) = args.max_depth {
        options.max_depth = Some(max_depth);
    }

    let start = Instant::now();
    let differences = find_differences_with(&expected, &actual, &options);
    tracing::debug!(
        expected = %args.expected.display(),
        actual = %args.actual.display(),
        diff_count = differences.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "documents compared"
    );

    let title = args.title.unwrap_or_else(|| {
        format!("{} vs {}", args.expected.display(), args.actual.display())
    });
    let report = DiffReport::with_options(title, &differences, &config.render);

    match args.format {
        OutputFormat::Text => print!("{}", render_report(&report)),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(if report.is_empty() {
        Outcome::Success
    } else {
        Outcome::DifferencesFound
    })
}
