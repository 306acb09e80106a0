//! Structural difference engine.
//!
//! Walks two values in lock-step and records every leaf divergence point as
//! a path-annotated [`Difference`].
//!
//! ## Entry point
//!
//! ```
//! use structdiff_core::diff::find_differences;
//!
//! let expected = vec!["go", "backend", "api"];
//! let actual = vec!["go", "frontend", "api"];
//! let diffs = find_differences(&expected, &actual);
//! assert_eq!(diffs.len(), 1);
//! assert_eq!(diffs[0].path, "[1]");
//! ```
//!
//! ## Guarantees
//!
//! - **Total**: never fails or panics on inspectable input; mismatched shapes
//!   degrade to a single kind-mismatch difference.
//! - **Reflexive**: comparing a value with itself yields no differences,
//!   unless it holds a `NaN` float. Floats compare with exact `==`, so every
//!   `NaN` is reported against itself as a value mismatch.
//! - **Coarse size mismatches**: sequences of different lengths and mappings
//!   of different sizes are reported once, at their own path.
//! - **Deterministic order**: record fields in declaration order, sequence
//!   elements by index, mapping keys in ascending key-text order.

pub mod engine;
pub mod model;
pub mod path;
pub mod report;

pub use engine::{find_differences, find_differences_with};
pub use model::{Difference, Reason};
pub use path::build_path;
pub use report::{format_diff_value, format_diff_value_with, render_report, DiffLine, DiffReport};
