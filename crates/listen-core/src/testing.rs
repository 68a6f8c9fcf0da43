// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory [`AnalysisService`] for tests and tooling.
//!
//! # Example
//!
//! ```
//! use listen_core::{
//!     ListenOptions, collect_listeners,
//!     testing::{MemoryAnnotation, MemoryClass}
//! };
//!
//! let class = MemoryClass::new().method("on_scroll", vec![MemoryAnnotation::listen_with(
//!     "window:scroll",
//!     ListenOptions::new().passive(false)
//! )]);
//!
//! let listeners = collect_listeners(&class).unwrap();
//! assert_eq!(listeners[0].event_name, "window:scroll");
//! assert!(!listeners[0].event_passive);
//! ```

use crate::{
    error::ListenError,
    options::ListenOptions,
    scan::{AnalysisService, LISTEN_ANNOTATION, RawListenArgs}
};

/// A class built in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClass {
    members: Vec<MemoryMember>
}

/// A member of a [`MemoryClass`].
#[derive(Debug, Clone)]
pub enum MemoryMember {
    /// A method with annotations and optional docs.
    Method {
        /// Method name.
        name:        String,
        /// Annotations in source order.
        annotations: Vec<MemoryAnnotation>,
        /// Doc text.
        docs:        Option<String>
    },

    /// A non-method member.
    Field {
        /// Field name.
        name: String
    }
}

/// An annotation on a [`MemoryMember`].
#[derive(Debug, Clone)]
pub struct MemoryAnnotation {
    callee: Option<String>,
    args:   RawListenArgs
}

impl MemoryAnnotation {
    /// `listen(event_names)` with no options.
    pub fn listen(event_names: impl Into<String>) -> Self {
        Self::call(LISTEN_ANNOTATION, RawListenArgs::new(event_names))
    }

    /// `listen(event_names, options)`.
    pub fn listen_with(event_names: impl Into<String>, options: ListenOptions) -> Self {
        Self::call(
            LISTEN_ANNOTATION,
            RawListenArgs::new(event_names).with_options(options)
        )
    }

    /// A call annotation with an arbitrary callee.
    pub fn call(callee: impl Into<String>, args: RawListenArgs) -> Self {
        Self {
            callee: Some(callee.into()),
            args
        }
    }

    /// A marker annotation that is not a call.
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            callee: None,
            args:   RawListenArgs::new(name)
        }
    }
}

impl MemoryClass {
    /// An empty class.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a method without docs.
    #[must_use]
    pub fn method(self, name: impl Into<String>, annotations: Vec<MemoryAnnotation>) -> Self {
        self.push(MemoryMember::Method {
            name: name.into(),
            annotations,
            docs: None
        })
    }

    /// Append a documented method.
    #[must_use]
    pub fn documented_method(
        self,
        name: impl Into<String>,
        docs: impl Into<String>,
        annotations: Vec<MemoryAnnotation>
    ) -> Self {
        self.push(MemoryMember::Method {
            name: name.into(),
            annotations,
            docs: Some(docs.into())
        })
    }

    /// Append a non-method member.
    #[must_use]
    pub fn field(self, name: impl Into<String>) -> Self {
        self.push(MemoryMember::Field {
            name: name.into()
        })
    }

    fn push(mut self, member: MemoryMember) -> Self {
        self.members.push(member);
        self
    }
}

impl AnalysisService for MemoryClass {
    type Member = MemoryMember;
    type Annotation = MemoryAnnotation;
    type Docs = Option<String>;
    type Error = ListenError;

    fn members(&self) -> &[MemoryMember] {
        &self.members
    }

    fn method_name(&self, member: &MemoryMember) -> Option<String> {
        match member {
            MemoryMember::Method { name, .. } => Some(name.clone()),
            MemoryMember::Field { .. } => None
        }
    }

    fn annotations<'a>(&self, member: &'a MemoryMember) -> &'a [MemoryAnnotation] {
        match member {
            MemoryMember::Method { annotations, .. } => annotations,
            MemoryMember::Field { .. } => &[]
        }
    }

    fn callee(&self, annotation: &MemoryAnnotation) -> Option<String> {
        annotation.callee.clone()
    }

    fn extract_arguments(&self, annotation: &MemoryAnnotation) -> Result<RawListenArgs, ListenError> {
        Ok(annotation.args.clone())
    }

    fn resolve_documentation(&self, member: &MemoryMember) -> Option<String> {
        match member {
            MemoryMember::Method { docs, .. } => docs.clone(),
            MemoryMember::Field { .. } => None
        }
    }

    fn grammar_error(&self, _annotation: &MemoryAnnotation, error: ListenError) -> ListenError {
        error
    }
}
