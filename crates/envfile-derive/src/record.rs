//! `EnvRecord` derive implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Field, LitStr, parse_macro_input};

use crate::utils::validate_struct_with_named_fields;

/// Main entry point for the EnvRecord derive macro.
pub fn derive_env_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_env_record_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_env_record_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = validate_struct_with_named_fields(input, "EnvRecord")?;

    let mut bindings = Vec::new();
    for field in fields {
        let Some(var) = parse_env_attribute(field)? else {
            continue;
        };
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;
        bindings.push(quote! {
            ::envfile::Field::new(#var, &mut self.#ident)
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envfile::EnvRecord for #name #ty_generics #where_clause {
            fn env_fields(&mut self) -> ::std::vec::Vec<::envfile::Field<'_>> {
                ::std::vec![#(#bindings),*]
            }
        }
    })
}

/// Parse the `#[env("NAME")]` attribute of a field, if any.
fn parse_env_attribute(field: &Field) -> syn::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;

    for attr in &field.attrs {
        if !attr.path().is_ident("env") {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[env(\"NAME\")] attribute",
            ));
        }

        let var: LitStr = attr.parse_args().map_err(|_| {
            syn::Error::new_spanned(attr, "expected #[env(\"NAME\")] with a string literal")
        })?;
        let value = var.value();
        if value.trim().is_empty() {
            return Err(syn::Error::new_spanned(
                &var,
                "environment variable name must not be empty",
            ));
        }
        if value.contains('=') {
            return Err(syn::Error::new_spanned(
                &var,
                "environment variable name must not contain '='",
            ));
        }
        found = Some(var);
    }

    Ok(found)
}
