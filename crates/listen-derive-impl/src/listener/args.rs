// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[listen(...)]` argument extraction.
//!
//! The first argument is a string literal with one or more comma-separated
//! event names. Options follow as key-value pairs and are parsed with
//! darling:
//!
//! ```rust,ignore
//! #[listen("click")]
//! #[listen("keydown.enter, keydown.space", capture = true)]
//! #[listen("window:scroll", passive = false, enabled = false)]
//! #[listen("touchstart", capture)]   // bare word means `true`
//! ```
//!
//! Only boolean literals take effect; any other value is kept verbatim as
//! [`OptionValue::Other`] and resolves to the default.

use darling::{FromMeta, ast::NestedMeta};
use listen_core::{ListenOptions, OptionValue, RawListenArgs};
use quote::ToTokens;
use syn::{Attribute, Expr, Lit};

/// A single option value as written in the attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrValue(OptionValue);

impl FromMeta for AttrValue {
    fn from_word() -> darling::Result<Self> {
        Ok(Self(OptionValue::Bool(true)))
    }

    fn from_value(value: &Lit) -> darling::Result<Self> {
        Ok(Self(match value {
            Lit::Bool(lit) => OptionValue::Bool(lit.value),
            Lit::Str(lit) => OptionValue::Other(lit.value()),
            other => OptionValue::Other(other.to_token_stream().to_string())
        }))
    }

    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        match expr {
            Expr::Lit(lit) => Self::from_value(&lit.lit),
            Expr::Group(group) => Self::from_expr(&group.expr),
            other => Ok(Self(OptionValue::Other(other.to_token_stream().to_string())))
        }
    }
}

/// Options accepted after the event names.
///
/// Unknown keys are rejected by darling.
#[derive(Debug, Default, FromMeta)]
struct ListenAttrOptions {
    capture: Option<AttrValue>,
    passive: Option<AttrValue>,
    enabled: Option<AttrValue>
}

impl From<ListenAttrOptions> for ListenOptions {
    fn from(attrs: ListenAttrOptions) -> Self {
        Self {
            capture: attrs.capture.map(|v| v.0),
            passive: attrs.passive.map(|v| v.0),
            enabled: attrs.enabled.map(|v| v.0)
        }
    }
}

/// Extract the raw `(event names, options)` payload of a `#[listen]`
/// attribute.
///
/// # Errors
///
/// - The attribute is not a list (`#[listen]`, `#[listen = ".."]`)
/// - The first argument is missing or not a string literal
/// - An option key is unknown or given twice
pub fn parse_listen_args(attr: &Attribute) -> darling::Result<RawListenArgs> {
    let list = attr.meta.require_list()?;
    let mut items = NestedMeta::parse_meta_list(list.tokens.clone())?.into_iter();

    let event_names = match items.next() {
        Some(NestedMeta::Lit(Lit::Str(lit))) => lit.value(),
        Some(other) => {
            return Err(
                darling::Error::custom("expected event names as a string literal, e.g. \"click\"")
                    .with_span(&other)
            );
        }
        None => {
            return Err(darling::Error::custom(
                "missing event names, e.g. #[listen(\"click\")]"
            )
            .with_span(attr));
        }
    };

    let rest: Vec<NestedMeta> = items.collect();
    let options = ListenAttrOptions::from_list(&rest)?;

    Ok(RawListenArgs {
        event_names,
        options: options.into()
    })
}
