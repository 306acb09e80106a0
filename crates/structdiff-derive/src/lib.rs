//! Procedural macros for structdiff
//!
//! - **`#[derive(Inspect)]`** - structural view of a record for the
//!   difference engine and the renderer
//!
//! # Example
//!
//! ```rust,ignore
//! use structdiff_core::{find_differences, Inspect};
//!
//! #[derive(Inspect)]
//! struct Person {
//!     name: String,
//!     #[inspect(rename = "Tags")]
//!     tags: Vec<String>,
//!     #[inspect(skip)]
//!     cache: std::cell::Cell<u32>,
//! }
//! ```

use proc_macro::TokenStream;

mod inspect;

/// Derives `structdiff_core::Inspect` for a struct with named fields.
///
/// Fields are exposed in declaration order under their Rust names.
///
/// # Attributes
///
/// - `#[inspect(skip)]` - hide the field from comparison and rendering; its
///   type does not need to implement `Inspect`
/// - `#[inspect(rename = "Name")]` - expose the field under another name
///
/// Every type parameter gets an `Inspect` bound. Tuple structs, enums and
/// unions are rejected.
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    inspect::derive_inspect_impl(input)
}
