// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Procedural macro implementation for `listen-derive`.
//!
//! Use `listen-derive` instead; it re-exports the macro together with the
//! runtime types the generated code refers to.
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[listeners]                                  // on an inherent impl block
//! impl Dialog {
//!     #[listen("keydown.escape")]               // key-restricted
//!     fn on_escape(&mut self) {}
//!
//!     #[listen("window:resize, window:scroll")] // several events, one method
//!     fn on_viewport(&mut self) {}
//!
//!     #[listen("touchmove", passive = false, capture = true, enabled = false)]
//!     fn on_touch(&mut self) {}
//! }
//!
//! let bindings = Dialog::listeners();
//! ```
//!
//! # Event Name Grammar
//!
//! ```text
//! segment := [prefix ':'] core ['.' suffix]
//! prefix  := child | parent | body | document | window
//! suffix  := enter | escape | space | tab | up | right | down | left
//! ```
//!
//! A malformed segment is a compile error on the offending attribute.

mod listener;
mod utils;

use proc_macro::TokenStream;

/// Attribute macro collecting `#[listen]` event bindings of an impl block.
///
/// # Overview
///
/// Every method carrying `#[listen("...")]` contributes one binding per
/// comma-separated event name. The macro validates each name at compile
/// time, removes the `#[listen]` attributes, and adds an associated
/// function returning the bindings in declaration order.
///
/// # Options
///
/// | Option | Default | Description |
/// |--------|---------|-------------|
/// | `crate = "path"` | `"::listen_derive"` | Runtime crate path |
/// | `fn_name = "ident"` | `"listeners"` | Accessor name |
///
/// # Listener Options
///
/// | Option | Default | Description |
/// |--------|---------|-------------|
/// | `capture` | `false` | Bind in the capture phase |
/// | `passive` | `true` for scroll, touch, wheel, pointer, mouse, drag and resize events | Passive binding |
/// | `enabled` | `true` | `false` starts the listener disabled |
///
/// # Example
///
/// ```rust,ignore
/// use listen_derive::listeners;
///
/// struct Carousel;
///
/// #[listeners]
/// impl Carousel {
///     /// Advances on swipe.
///     #[listen("touchend")]
///     fn on_swipe(&mut self) {}
///
///     #[listen("keydown.left, keydown.right", capture = true)]
///     fn on_arrow(&mut self) {}
/// }
///
/// let bindings = Carousel::listeners();
/// assert_eq!(bindings.len(), 3);
/// assert!(bindings[0].event_passive);
/// ```
#[proc_macro_attribute]
pub fn listeners(attr: TokenStream, item: TokenStream) -> TokenStream {
    listener::expand(attr, item)
}
