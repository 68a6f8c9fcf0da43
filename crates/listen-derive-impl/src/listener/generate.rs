// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for `#[listeners]`.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl Dialog {
//!     fn on_escape(&mut self) {}   // #[listen] removed
//! }
//!
//! impl Dialog {
//!     pub fn listeners() -> Vec<::listen_derive::ListenerMeta> {
//!         vec![::listen_derive::ListenerMeta { event_name: ..., .. }]
//!     }
//! }
//! ```

use listen_core::{LISTEN_ANNOTATION, ListenerMeta, MethodDocs};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{ImplItem, ItemImpl, Path};

use super::config::ListenersConfig;

/// Remove every `#[listen]` attribute from the methods of an impl block.
///
/// The attribute is inert once the block has been scanned and would be
/// rejected by the compiler otherwise.
pub fn strip_listen_attrs(mut item: ItemImpl) -> ItemImpl {
    for member in &mut item.items {
        if let ImplItem::Fn(method) = member {
            method
                .attrs
                .retain(|attr| !attr.path().is_ident(LISTEN_ANNOTATION));
        }
    }
    item
}

/// Emit the cleaned impl block and the accessor returning `records`.
pub fn generate(item: &ItemImpl, config: &ListenersConfig, records: &[ListenerMeta]) -> TokenStream {
    let stripped = strip_listen_attrs(item.clone());
    let krate = &config.krate;
    let fn_name = &config.fn_name;
    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let entries = records.iter().map(|record| record_tokens(record, krate));

    let doc = format!(
        "Event listeners declared with `#[listen]`, in declaration order ({} total).",
        records.len()
    );

    quote! {
        #stripped

        impl #impl_generics #self_ty #where_clause {
            #[doc = #doc]
            #[must_use]
            pub fn #fn_name() -> ::std::vec::Vec<#krate::ListenerMeta> {
                ::std::vec![#(#entries),*]
            }
        }
    }
}

/// Output for a block whose expansion failed.
///
/// Inherent impls still get an empty accessor; trait impls only lose their
/// `#[listen]` attributes.
pub fn generate_fallback(item: &ItemImpl, config: &ListenersConfig) -> TokenStream {
    if item.trait_.is_some() {
        return strip_listen_attrs(item.clone()).into_token_stream();
    }
    generate(item, config, &[])
}

/// Struct literal rebuilding one record at runtime.
fn record_tokens(record: &ListenerMeta, krate: &Path) -> TokenStream {
    let ListenerMeta {
        event_name,
        event_method_name,
        event_capture,
        event_passive,
        event_disabled,
        documentation
    } = record;
    let MethodDocs {
        name,
        docs,
        signature
    } = documentation;

    let docs = match docs {
        Some(text) => {
            quote! { ::std::option::Option::Some(::std::string::String::from(#text)) }
        }
        None => quote! { ::std::option::Option::None }
    };

    quote! {
        #krate::ListenerMeta {
            event_name: ::std::string::String::from(#event_name),
            event_method_name: ::std::string::String::from(#event_method_name),
            event_capture: #event_capture,
            event_passive: #event_passive,
            event_disabled: #event_disabled,
            documentation: #krate::MethodDocs {
                name: ::std::string::String::from(#name),
                docs: #docs,
                signature: ::std::string::String::from(#signature)
            }
        }
    }
}
