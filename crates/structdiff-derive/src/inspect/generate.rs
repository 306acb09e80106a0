//! Code generation for the Inspect derive

use super::parse::FieldAttrs;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields, Generics};

/// Generate `impl Inspect` for a struct with named fields.
///
/// The generated `inspect` builds a `Record` whose fields follow declaration
/// order; skipped fields become hidden descriptors.
///
/// # Errors
///
/// Returns an error if:
/// - Input is a tuple struct, an enum or a union
/// - A field attribute is malformed
pub(super) fn generate_inspect(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let type_name = name.to_string();

    let mut descriptors = Vec::new();
    for field in named_fields(input)? {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = FieldAttrs::from_attributes(&field.attrs)?;
        let label = attrs.rename.unwrap_or_else(|| unraw(&ident.to_string()));

        descriptors.push(if attrs.skip {
            quote! { .hidden(#label) }
        } else {
            quote! { .field(#label, &self.#ident) }
        });
    }

    let generics = add_inspect_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::structdiff_core::Inspect for #name #ty_generics #where_clause {
            fn inspect(&self) -> ::structdiff_core::Value<'_> {
                ::structdiff_core::Value::Record(
                    ::structdiff_core::Record::new(#type_name)
                        #(#descriptors)*
                )
            }

            fn static_kind() -> ::structdiff_core::Kind
            where
                Self: Sized,
            {
                ::structdiff_core::Kind::Record
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<Vec<&syn::Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields.named.iter().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                input,
                "Inspect can only be derived for structs with named fields.\n\
                 \n\
                 Tuple structs have no field names to build paths from.",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            input,
            "Inspect cannot be derived for enums.\n\
             \n\
             Implement `Inspect` by hand, or wrap the value in `Opaque`.",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "Inspect cannot be derived for unions.",
        )),
    }
}

fn add_inspect_bounds(mut generics: Generics) -> Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::structdiff_core::Inspect));
    }
    generics
}

/// `r#type` is exposed as `type`.
fn unraw(name: &str) -> String {
    name.strip_prefix("r#").unwrap_or(name).to_string()
}
