// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types and pipeline for listen-derive.
//!
//! This crate turns `#[listen("...")]` annotations on methods into ordered
//! [`ListenerMeta`] records. It knows nothing about Rust syntax: the class
//! is seen through an [`AnalysisService`], which `listen-derive` implements
//! over `syn` and [`testing::MemoryClass`] implements in memory.
//!
//! # Overview
//!
//! - [`event`] — event-name grammar (`[prefix ':'] core ['.' suffix]`)
//! - [`options`] — `capture` / `passive` / `enabled` resolution
//! - [`scan`] — member scanning and comma fan-out
//! - [`assemble`] — record assembly, [`collect_listeners`]
//! - [`tables`] — passive-default events, prefixes, keycodes
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `listen-derive` directly, which re-exports this
//! crate. For other front ends, implement [`AnalysisService`]:
//!
//! ```rust,ignore
//! use listen_core::prelude::*;
//!
//! impl AnalysisService for MyClass {
//!     type Member = MyMember;
//!     type Annotation = MyDecorator;
//!     type Docs = String;
//!     type Error = MyError;
//!     // ...
//! }
//!
//! let listeners = collect_listeners(&class)?;
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod assemble;
pub mod error;
pub mod event;
pub mod meta;
pub mod options;
pub mod prelude;
pub mod scan;
pub mod tables;
pub mod testing;

pub use assemble::{assemble, collect_listeners};
pub use error::ListenError;
pub use event::{ElementRef, EventSpec, KeyCode, parse_event_spec};
pub use meta::{ListenerMeta, MethodDocs};
pub use options::{EffectiveOptions, ListenOptions, OptionValue};
pub use scan::{AnalysisService, LISTEN_ANNOTATION, ListenCandidate, RawListenArgs, scan_members};
