// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[listeners]` attribute macro implementation.
//!
//! The impl block is scanned through [`ImplBlock`], validated by
//! `listen-core`, and re-emitted with an accessor listing every binding.
//!
//! # Module Structure
//!
//! - [`args`] — `#[listen(...)]` argument extraction
//! - [`config`] — `#[listeners(...)]` options
//! - [`service`] — syn-backed analysis service
//! - [`generate`] — code generation

mod args;
mod config;
mod generate;
mod service;


use listen_core::collect_listeners;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ItemImpl, parse_macro_input};

use self::{
    config::ListenersConfig,
    generate::{generate, generate_fallback},
    service::ImplBlock
};

/// Main entry point for the `#[listeners]` attribute.
pub fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemImpl);
    expand_or_recover(attr.into(), &item).into()
}

/// Expand, or emit the errors next to a fallback expansion.
///
/// The fallback keeps the methods and, for inherent impls, an empty
/// accessor, so call sites of either do not add diagnostics of their own.
fn expand_or_recover(attr: TokenStream2, item: &ItemImpl) -> TokenStream2 {
    let (config, result) = match ListenersConfig::from_tokens(attr) {
        Ok(config) => {
            let result = expand_impl(&config, item);
            (config, result)
        }
        Err(err) => (ListenersConfig::default(), Err(err))
    };

    match result {
        Ok(tokens) => tokens,
        Err(err) => {
            let errors = err.write_errors();
            let fallback = generate_fallback(item, &config);
            quote! {
                #errors
                #fallback
            }
        }
    }
}

/// Scan, validate and generate.
fn expand_impl(config: &ListenersConfig, item: &ItemImpl) -> darling::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(darling::Error::custom(
            "#[listeners] can only be applied to inherent impl blocks"
        )
        .with_span(path));
    }

    let records = collect_listeners(&ImplBlock::new(item))?;
    Ok(generate(item, config, &records))
}
