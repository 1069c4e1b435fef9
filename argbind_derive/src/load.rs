use quote::ToTokens;
use syn::ext::IdentExt;
use syn::spanned::Spanned;

use crate::model::{DeriveField, DeriveRecord};

const SUPPORTED_TYPES: [&str; 14] = [
    "String", "bool", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
    "f32", "f64",
];

impl TryFrom<syn::DeriveInput> for DeriveRecord {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                value.generics.span(),
                "Invalid - Record cannot be derived for a generic struct.",
            ));
        }

        match &value.data {
            syn::Data::Struct(ds) => {
                let fields = match &ds.fields {
                    syn::Fields::Named(fields) => fields
                        .named
                        .iter()
                        .map(DeriveField::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::Fields::Unit => Vec::default(),
                    syn::Fields::Unnamed(_) => {
                        return Err(syn::Error::new(
                            value.ident.span(),
                            "Invalid - Record requires named fields; a tuple struct has none.",
                        ));
                    }
                };

                Ok(DeriveRecord {
                    struct_name: value.ident.clone(),
                    fields,
                })
            }
            _ => Err(syn::Error::new(
                value.ident.span(),
                "Invalid - Record can only be derived for a struct.",
            )),
        }
    }
}

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(value.span(), "Invalid - field must be named."))?;

        if !is_supported(&value.ty) {
            return Err(syn::Error::new(
                value.ty.span(),
                format!(
                    "unsupported type '{}' in field '{}'",
                    value.ty.to_token_stream(),
                    field_name.unraw(),
                ),
            ));
        }

        let mut flag_name = field_name.unraw().to_string();

        for attribute in &value.attrs {
            if attribute.path().is_ident("argbind") {
                attribute.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        let rename: syn::LitStr = meta.value()?.parse()?;
                        flag_name = rename.value();
                        Ok(())
                    } else {
                        Err(meta.error("Invalid - unknown argbind attribute."))
                    }
                })?;
            }
        }

        Ok(DeriveField {
            field_name,
            flag_name,
        })
    }
}

// Matches the supported primitives by name, with or without a path prefix (ex: `std::string::String`).
fn is_supported(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(syn::TypePath { qself: None, path }) => match path.segments.last() {
            Some(segment) => {
                segment.arguments.is_none()
                    && SUPPORTED_TYPES.contains(&segment.ident.to_string().as_str())
            }
            None => false,
        },
        syn::Type::Group(group) => is_supported(&group.elem),
        syn::Type::Paren(paren) => is_supported(&paren.elem),
        _ => false,
    }
}
