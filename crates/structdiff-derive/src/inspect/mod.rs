//! Inspect derive macro implementation

mod generate;
mod parse;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

pub(crate) fn derive_inspect_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate::generate_inspect(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
