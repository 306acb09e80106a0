//! structdiff Core - structural comparison and canonical rendering
//!
//! This crate compares two arbitrarily nested values and reports every point
//! of divergence as a path-annotated [`Difference`], and renders any value
//! into a canonical human-readable string. It provides:
//! - A closed structural view ([`Value`], [`Kind`]) over anything implementing [`Inspect`]
//! - `#[derive(Inspect)]` for records, with per-field visibility
//! - The difference engine ([`find_differences`]) and path builder
//! - The value renderer ([`render`]) and report formatting
//! - JSON document loading, options/config, error and logging facilities

// Lets code generated by `#[derive(Inspect)]` name this crate from inside it.
extern crate self as structdiff_core;

pub mod config;
pub mod diff;
pub mod document;
pub mod errors;
pub mod logging_facility;
pub mod render;
pub mod value;

#[doc(hidden)]
pub use structdiff_core_types as core_types;

// Re-export commonly used types
pub use config::{Config, DiffOptions, RenderOptions};
pub use diff::{find_differences, find_differences_with, Difference, Reason};
pub use document::{load_document, parse_document};
pub use errors::{ExError, ExErrorKind, Result, StructDiffError};
pub use render::{render, render_with};
pub use structdiff_derive::Inspect;
pub use value::{classify, Entry, Field, Float, Inspect, Kind, Nilable, Opaque, Record, Value};
