//! Parsing of #[inspect(...)] attributes

use syn::{Attribute, LitStr};

/// Per-field options.
#[derive(Debug, Default, Clone)]
pub(super) struct FieldAttrs {
    pub skip: bool,
    pub rename: Option<String>,
}

impl FieldAttrs {
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("inspect") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    result.skip = true;
                    return Ok(());
                }

                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    if value.value().is_empty() {
                        return Err(syn::Error::new_spanned(
                            &value,
                            "rename requires a non-empty name",
                        ));
                    }
                    result.rename = Some(value.value());
                    return Ok(());
                }

                Err(meta.error("unknown inspect attribute, expected `skip` or `rename = \"...\"`"))
            })?;
        }

        Ok(result)
    }
}
