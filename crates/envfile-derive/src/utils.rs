//! Shared helpers for validating derive input.

use syn::{Data, DeriveInput, Field, Fields, punctuated::Punctuated, token::Comma};

/// Validate that the input is a struct with named fields, returning the fields.
///
/// The error names what was received instead so the diagnostic reads like
/// "EnvRecord derive only supports structs with named fields, got enum".
pub fn validate_struct_with_named_fields<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    let received = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => return Ok(&fields.named),
            Fields::Unnamed(_) => "tuple struct",
            Fields::Unit => "unit struct",
        },
        Data::Enum(_) => "enum",
        Data::Union(_) => "union",
    };

    Err(syn::Error::new_spanned(
        &input.ident,
        format!("{macro_name} derive only supports structs with named fields, got {received}"),
    ))
}
