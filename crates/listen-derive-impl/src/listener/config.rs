// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[listeners(...)]` macro arguments.
//!
//! # Options
//!
//! | Option | Default | Effect |
//! |--------|---------|--------|
//! | `crate = "path"` | `"::listen_derive"` | Path of the runtime crate used in generated code |
//! | `fn_name = "ident"` | `"listeners"` | Name of the generated accessor |
//!
//! ```rust,ignore
//! #[listeners]
//! #[listeners(fn_name = "event_bindings")]
//! #[listeners(crate = "::my_ui::listen")]
//! ```

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::{Span, TokenStream};
use syn::{Ident, Path};

/// Returns the default runtime crate path.
fn default_crate_path() -> Path {
    syn::parse_quote!(::listen_derive)
}

/// Returns the default accessor name.
fn default_fn_name() -> Ident {
    Ident::new("listeners", Span::call_site())
}

/// Parsed `#[listeners(...)]` arguments.
#[derive(Debug, FromMeta)]
pub struct ListenersConfig {
    /// Runtime crate path.
    #[darling(rename = "crate", default = "default_crate_path")]
    pub krate: Path,

    /// Generated accessor name.
    #[darling(default = "default_fn_name")]
    pub fn_name: Ident
}

impl ListenersConfig {
    /// Parse the attribute arguments.
    ///
    /// # Errors
    ///
    /// Unknown keys, duplicate keys, and values that are not valid paths or
    /// identifiers.
    pub fn from_tokens(args: TokenStream) -> darling::Result<Self> {
        let items = NestedMeta::parse_meta_list(args)?;
        Self::from_list(&items)
    }
}

/// Configuration used when the attribute arguments fail to parse.
impl Default for ListenersConfig {
    fn default() -> Self {
        Self {
            krate:   default_crate_path(),
            fn_name: default_fn_name()
        }
    }
}
