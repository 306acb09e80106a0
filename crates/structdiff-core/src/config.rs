//! Options for the difference engine and the renderer.
//!
//! Both option sets deserialize from TOML with every key optional:
//!
//! ```toml
//! [diff]
//! max_depth = 16
//!
//! [render]
//! sort_map_keys = false
//! ```

use crate::errors::{Result, StructDiffError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Difference engine options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffOptions {
    /// Number of composite levels the engine descends before reporting a
    /// differing subtree as a single `DepthExceeded` difference.
    /// `None` descends without limit.
    pub max_depth: Option<usize>,
}

impl DiffOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Renderer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Emit mapping entries in ascending order of their rendered key.
    /// When false, the mapping's own iteration order is kept.
    pub sort_map_keys: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sort_map_keys: true,
        }
    }
}

/// Combined configuration, as read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub diff: DiffOptions,
    pub render: RenderOptions,
}

impl Config {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — the text is not TOML or does not match the schema
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| StructDiffError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// - `Io` — the file cannot be read
    /// - `InvalidConfig` — the contents do not parse
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| StructDiffError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            op = structdiff_core_types::schema::OP_LOAD_CONFIG,
            path = %path.display(),
            max_depth = ?config.diff.max_depth,
            sort_map_keys = config.render.sort_map_keys,
            "configuration loaded"
        );
        Ok(config)
    }
}
