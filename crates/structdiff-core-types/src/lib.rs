//! Core types shared across structdiff facilities
//!
//! This crate provides the canonical names used by the logging facility
//! and the CLI so that emitted events stay consistent:
//!
//! - **Schema constants**: canonical field keys, event names and op names

pub mod schema;
