// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! [`AnalysisService`] over a `syn` impl block.
//!
//! | Concept | syn type |
//! |---------|----------|
//! | class | [`ItemImpl`] |
//! | member | [`ImplItem`] |
//! | method | [`ImplItem::Fn`] |
//! | annotation | [`Attribute`] |
//! | callee | attribute path |
//!
//! Every attribute form counts as an annotation call. A `#[listen]` or
//! `#[listen = ".."]` is picked up by the scanner and then rejected by
//! argument extraction instead of being dropped silently.

use listen_core::{AnalysisService, ListenError, MethodDocs, RawListenArgs};
use proc_macro2::TokenTree;
use syn::{Attribute, ImplItem, ItemImpl, Meta};

use super::args::parse_listen_args;
use crate::utils::docs::method_docs;

/// Read-only view of an impl block for the listener scanner.
pub struct ImplBlock<'a> {
    item: &'a ItemImpl
}

impl<'a> ImplBlock<'a> {
    /// Wrap a parsed impl block.
    pub const fn new(item: &'a ItemImpl) -> Self {
        Self { item }
    }
}

impl AnalysisService for ImplBlock<'_> {
    type Member = ImplItem;
    type Annotation = Attribute;
    type Docs = MethodDocs;
    type Error = darling::Error;

    fn members(&self) -> &[ImplItem] {
        &self.item.items
    }

    fn method_name(&self, member: &ImplItem) -> Option<String> {
        match member {
            ImplItem::Fn(method) => Some(method.sig.ident.to_string()),
            _ => None
        }
    }

    fn annotations<'m>(&self, member: &'m ImplItem) -> &'m [Attribute] {
        match member {
            ImplItem::Fn(method) => &method.attrs,
            _ => &[]
        }
    }

    fn callee(&self, annotation: &Attribute) -> Option<String> {
        annotation.path().get_ident().map(ToString::to_string)
    }

    fn extract_arguments(&self, annotation: &Attribute) -> darling::Result<RawListenArgs> {
        parse_listen_args(annotation)
    }

    fn resolve_documentation(&self, member: &ImplItem) -> MethodDocs {
        match member {
            ImplItem::Fn(method) => method_docs(method),
            _ => MethodDocs::default()
        }
    }

    fn grammar_error(&self, annotation: &Attribute, error: ListenError) -> darling::Error {
        let err = darling::Error::custom(error);
        match event_names_token(annotation) {
            Some(token) => err.with_span(&token),
            None => err.with_span(&annotation.meta)
        }
    }
}

/// First token inside `#[listen(...)]`, the event-name literal.
fn event_names_token(annotation: &Attribute) -> Option<TokenTree> {
    match &annotation.meta {
        Meta::List(list) => list.tokens.clone().into_iter().next(),
        _ => None
    }
}
