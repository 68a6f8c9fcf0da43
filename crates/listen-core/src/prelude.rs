// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use listen_core::prelude::*;
//! ```

pub use crate::{
    AnalysisService, EffectiveOptions, ListenError, ListenOptions, ListenerMeta, MethodDocs,
    OptionValue, RawListenArgs, collect_listeners
};
