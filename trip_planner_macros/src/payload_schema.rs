use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, ItemStruct, LitStr};

use crate::schema_extraction::{
    collect_doc_comments, collect_field_docs, ensure_named_struct, infer_description,
    infer_schema_name, PayloadSchemaArgs,
};

/// Re-emit the struct followed by a `PayloadSchema` impl backed by a per-type static.
pub fn expand(args: PayloadSchemaArgs, item: ItemStruct) -> syn::Result<TokenStream> {
    ensure_named_struct(&item)?;
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new(
            item.generics.span(),
            "`#[payload_schema]` does not support generic structs",
        ));
    }

    let ident = &item.ident;
    let rust_type = LitStr::new(&ident.to_string(), ident.span());
    let name = infer_schema_name(&item, args.name.as_ref());
    let description = match infer_description(
        args.description.as_ref(),
        collect_doc_comments(&item.attrs),
    ) {
        Some(text) => quote! { ::core::option::Option::Some(#text) },
        None => quote! { ::core::option::Option::None },
    };
    let fields = collect_field_docs(&item).into_iter().map(|(key, doc)| {
        let key = LitStr::new(&key, ident.span());
        let doc = LitStr::new(&doc, ident.span());
        quote! { (#key, #doc) }
    });

    Ok(quote! {
        #item

        impl trip_planner_rs::schema::PayloadSchema for #ident {
            fn schema() -> &'static trip_planner_rs::schema::SchemaHandle {
                static HANDLE: ::std::sync::OnceLock<trip_planner_rs::schema::SchemaHandle> =
                    ::std::sync::OnceLock::new();
                HANDLE.get_or_init(|| {
                    trip_planner_rs::schema::SchemaHandle::for_type::<Self>(
                        trip_planner_rs::schema::PayloadDocs {
                            name: #name,
                            rust_type: #rust_type,
                            description: #description,
                            fields: &[#(#fields),*],
                        },
                    )
                })
            }
        }
    })
}
