// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation extraction for listener methods.
//!
//! Doc comments (`///` and `/** */`) reach the macro as `#[doc = "..."]`
//! attributes. They are joined here and attached to every listener record
//! of the method, together with its rendered signature.
//!
//! # Example
//!
//! ```rust,ignore
//! /// Closes the dialog.
//! ///
//! /// Bound to the escape key.
//! #[listen("keydown.escape")]
//! fn on_escape(&mut self) {}
//!
//! // docs:      "Closes the dialog.\n\nBound to the escape key."
//! // signature: "fn on_escape (& mut self)"
//! ```

use listen_core::MethodDocs;
use quote::ToTokens;
use syn::{Attribute, ImplItemFn, Signature};

/// Extract doc comments from attributes.
///
/// Combines all `#[doc = "..."]` attributes into a single string,
/// trimming each line.
///
/// # Returns
///
/// Combined doc string, or `None` if no doc comments present.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let doc_lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value());
            }
            None
        })
        .collect();

    if doc_lines.is_empty() {
        return None;
    }

    let combined = doc_lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed = combined.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Render a method signature as source text.
///
/// Spacing follows `proc_macro2`'s token printer, not the author's layout.
pub fn render_signature(sig: &Signature) -> String {
    sig.to_token_stream().to_string()
}

/// Build the documentation blob for a listener method.
pub fn method_docs(method: &ImplItemFn) -> MethodDocs {
    MethodDocs {
        name:      method.sig.ident.to_string(),
        docs:      extract_doc_comments(&method.attrs),
        signature: render_signature(&method.sig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_method(input: &str) -> ImplItemFn {
        syn::parse_str(input).unwrap()
    }

    #[test]
    fn extract_single_line_doc() {
        let method = parse_method(
            r#"
            /// Handles clicks.
            fn on_click(&self) {}
        "#
        );
        assert_eq!(extract_doc_comments(&method.attrs), Some("Handles clicks.".to_string()));
    }

    #[test]
    fn extract_doc_with_empty_lines() {
        let method = parse_method(
            r#"
            /// Summary.
            ///
            /// Details here.
            fn on_scroll(&self) {}
        "#
        );
        assert_eq!(
            extract_doc_comments(&method.attrs),
            Some("Summary.\n\nDetails here.".to_string())
        );
    }

    #[test]
    fn extract_no_docs() {
        let method = parse_method(
            r#"
            #[inline]
            fn on_resize(&self) {}
        "#
        );
        assert_eq!(extract_doc_comments(&method.attrs), None);
    }

    #[test]
    fn method_docs_name_and_docs() {
        let method = parse_method(
            r#"
            /// Closes the dialog.
            fn on_escape(&mut self) {}
        "#
        );
        let docs = method_docs(&method);
        assert_eq!(docs.name, "on_escape");
        assert_eq!(docs.docs.as_deref(), Some("Closes the dialog."));
        assert!(docs.signature.starts_with("fn on_escape"));
        assert!(docs.signature.contains("self"));
    }
}
