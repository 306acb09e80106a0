//! Subcommands and the pieces they share.

pub mod diff;
pub mod render;

use anyhow::Context;
use std::path::Path;
use std::process::ExitCode;
use structdiff_core::{Config, ExError};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_DIFFERENCES: u8 = 1;
pub const EXIT_ERROR: u8 = 2;

/// Result of a successful command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Documents equal, or nothing to compare
    Success,
    DifferencesFound,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::from(EXIT_SUCCESS),
            Outcome::DifferencesFound => ExitCode::from(EXIT_DIFFERENCES),
        }
    }
}

/// Configuration file (if any) overlaid with global flags.
pub fn load_config(path: Option<&Path>, no_sort_keys: bool) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)
            .map_err(ExError::from)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => Config::default(),
    };
    if no_sort_keys {
        config.render.sort_map_keys = false;
    }
    Ok(config)
}

/// Read and parse a JSON document.
pub fn load_document(path: &Path) -> anyhow::Result<serde_json::Value> {
    structdiff_core::load_document(path)
        .with_context(|| format!("loading document {}", path.display()))
}
