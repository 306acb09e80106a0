//! Render command
//!
//! Usage: structdiff render <FILE> [--output <FILE>]

use super::{load_document, Outcome};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use structdiff_core::{render_with, Config};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Document to render (JSON)
    pub file: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute render command
pub fn execute(args: RenderArgs, config: &Config) -> anyhow::Result<Outcome> {
    let document = load_document(&args.file)?;
    let rendered = render_with(&document, &config.render);

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, format!("{}\n", rendered))
            .with_context(|| format!("writing {}", output_path.display()))?;
        println!("✓ Rendered to {}", output_path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(Outcome::Success)
}
