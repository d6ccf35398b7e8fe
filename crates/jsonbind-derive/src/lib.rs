//! Derive macro for jsonbind record types.
//!
//! `#[derive(JsonRecord)]` turns a named-field struct into a record the
//! codec can walk: it emits the static field-descriptor table and the
//! `JsonRecord`, `JsonEncode` and `JsonDecode` impls dispatching over it.
//!
//! Field attributes:
//!
//! - `#[json(rename = "literal")]` — use the literal as the JSON key,
//!   bypassing the naming policy.
//! - `#[json(skip)]` — drop the field from both encode and decode.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

static JSON_ATTRIBUTE_NAME: &str = "json";

#[proc_macro_derive(JsonRecord, attributes(json))]
pub fn derive_json_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

#[derive(Default)]
struct FieldAttributes {
    rename: Option<LitStr>,
    skip: bool,
}

impl FieldAttributes {
    fn parse(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(JSON_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    parsed.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    parsed.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"` or `skip`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "JsonRecord can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "JsonRecord requires named fields",
        ));
    };

    let mut descriptors = Vec::new();
    let mut encode_arms = Vec::new();
    let mut null_arms = Vec::new();
    let mut decode_arms = Vec::new();

    for (index, field) in fields.named.iter().enumerate() {
        let ident = field.ident.as_ref().expect("named field");
        let attrs = FieldAttributes::parse(&field.attrs)?;
        let source_name = ident.to_string();
        let rename = match &attrs.rename {
            Some(lit) => quote! { ::core::option::Option::Some(#lit) },
            None => quote! { ::core::option::Option::None },
        };
        let skip = attrs.skip;
        descriptors.push(quote! {
            ::jsonbind::FieldDescriptor {
                name: #source_name,
                rename: #rename,
                skip: #skip,
            }
        });
        encode_arms.push(quote! {
            #index => ::jsonbind::JsonEncode::encode(&self.#ident, encoder),
        });
        null_arms.push(quote! {
            #index => ::jsonbind::JsonEncode::is_null(&self.#ident),
        });
        decode_arms.push(quote! {
            #index => {
                self.#ident = ::jsonbind::JsonDecode::decode(decoder)?;
                ::core::result::Result::Ok(())
            }
        });
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::jsonbind::JsonRecord for #name #ty_generics #where_clause {
            const FIELDS: &'static [::jsonbind::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            fn encode_field(
                &self,
                index: usize,
                encoder: &mut ::jsonbind::JsonEncoder,
            ) -> ::core::result::Result<(), ::jsonbind::JsonError> {
                match index {
                    #(#encode_arms)*
                    _ => ::core::unreachable!("field index out of range"),
                }
            }

            fn field_is_null(&self, index: usize) -> bool {
                match index {
                    #(#null_arms)*
                    _ => false,
                }
            }

            fn decode_field(
                &mut self,
                index: usize,
                decoder: &mut ::jsonbind::JsonDecoder,
            ) -> ::core::result::Result<(), ::jsonbind::JsonError> {
                match index {
                    #(#decode_arms)*
                    _ => ::core::unreachable!("field index out of range"),
                }
            }
        }

        impl #impl_generics ::jsonbind::JsonEncode for #name #ty_generics #where_clause {
            fn encode(
                &self,
                encoder: &mut ::jsonbind::JsonEncoder,
            ) -> ::core::result::Result<(), ::jsonbind::JsonError> {
                encoder.encode_record(self)
            }
        }

        impl #impl_generics ::jsonbind::JsonDecode for #name #ty_generics #where_clause {
            fn decode(
                decoder: &mut ::jsonbind::JsonDecoder,
            ) -> ::core::result::Result<Self, ::jsonbind::JsonError> {
                decoder.decode_record::<Self>()
            }
        }
    })
}
