// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Member scanning.
//!
//! The scanner never looks at syntax directly. Everything it needs from the
//! annotated class comes through an [`AnalysisService`], so the same
//! pipeline runs over a `syn::ItemImpl`, an in-memory fixture, or any other
//! representation.
//!
//! # Steps
//!
//! 1. Keep members that are methods with at least one annotation
//! 2. Take the first annotation whose callee is [`LISTEN_ANNOTATION`]
//! 3. Extract its raw arguments
//! 4. Split the event names on `,`, trim, drop empty segments
//! 5. Resolve documentation once per surviving segment

use crate::{error::ListenError, options::ListenOptions};

/// Callee identifier that marks a listener method.
pub const LISTEN_ANNOTATION: &str = "listen";

/// Raw arguments of a `#[listen]` annotation, exactly as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListenArgs {
    /// Event names, possibly comma-separated.
    pub event_names: String,

    /// Explicit binding options.
    pub options: ListenOptions
}

impl RawListenArgs {
    /// Arguments with the given event names and no options.
    pub fn new(event_names: impl Into<String>) -> Self {
        Self {
            event_names: event_names.into(),
            options:     ListenOptions::default()
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: ListenOptions) -> Self {
        self.options = options;
        self
    }

    /// Non-empty trimmed segments in authored order.
    ///
    /// Trailing and doubled commas produce empty segments, which are
    /// skipped.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.event_names
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
    }
}

/// Read-only view of an annotated class.
///
/// Implementors wrap whatever syntax tree or symbol table they have. The
/// scanner only calls these methods; it never mutates the class.
pub trait AnalysisService {
    /// A class member (method, field, constant, ...).
    type Member;

    /// An annotation attached to a member.
    type Annotation;

    /// Documentation attached verbatim to each record.
    type Docs;

    /// Failure type for argument extraction and grammar errors.
    type Error;

    /// Members in declaration order.
    fn members(&self) -> &[Self::Member];

    /// The member's name if it is a method, `None` otherwise.
    fn method_name(&self, member: &Self::Member) -> Option<String>;

    /// Annotations of a member in source order.
    fn annotations<'a>(&self, member: &'a Self::Member) -> &'a [Self::Annotation];

    /// Callee identifier of an annotation call.
    ///
    /// Returns `None` for annotations that are not calls.
    fn callee(&self, annotation: &Self::Annotation) -> Option<String>;

    /// Raw `(event names, options)` payload of an annotation.
    ///
    /// # Errors
    ///
    /// Implementation-defined, for payloads that cannot be read at all.
    fn extract_arguments(&self, annotation: &Self::Annotation)
    -> Result<RawListenArgs, Self::Error>;

    /// Documentation for a method member.
    fn resolve_documentation(&self, member: &Self::Member) -> Self::Docs;

    /// Wrap a grammar violation found in `annotation`.
    fn grammar_error(&self, annotation: &Self::Annotation, error: ListenError) -> Self::Error;
}

/// One event segment waiting for validation.
pub struct ListenCandidate<'a, S: AnalysisService + ?Sized> {
    /// Trimmed segment as authored.
    pub segment: String,

    /// Explicit options of the enclosing annotation.
    pub options: ListenOptions,

    /// Name of the annotated method.
    pub method_name: String,

    /// Annotation the segment came from.
    pub annotation: &'a S::Annotation,

    /// Documentation of the annotated method.
    pub documentation: S::Docs
}

/// Collect listener candidates from every member of the class.
///
/// Order is member declaration order, then segment order within the
/// annotation. Only the first `listen` annotation of a method is used.
///
/// # Errors
///
/// Propagates the first [`AnalysisService::extract_arguments`] failure.
pub fn scan_members<S>(service: &S) -> Result<Vec<ListenCandidate<'_, S>>, S::Error>
where
    S: AnalysisService + ?Sized
{
    let mut candidates = Vec::new();

    for member in service.members() {
        let Some(method_name) = service.method_name(member) else {
            continue;
        };
        let annotations = service.annotations(member);
        if annotations.is_empty() {
            continue;
        }

        let Some(annotation) = annotations
            .iter()
            .find(|a| service.callee(a).as_deref() == Some(LISTEN_ANNOTATION))
        else {
            continue;
        };

        let args = service.extract_arguments(annotation)?;
        for segment in args.segments() {
            candidates.push(ListenCandidate {
                segment: segment.to_string(),
                options: args.options.clone(),
                method_name: method_name.clone(),
                annotation,
                documentation: service.resolve_documentation(member)
            });
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryAnnotation, MemoryClass};

    #[test]
    fn segments_drop_empty_entries() {
        let args = RawListenArgs::new(" click ,, scroll ,");
        assert_eq!(args.segments().collect::<Vec<_>>(), ["click", "scroll"]);
    }

    #[test]
    fn segments_of_blank_string() {
        assert_eq!(RawListenArgs::new("  ").segments().count(), 0);
    }

    #[test]
    fn skips_fields_and_unannotated_methods() {
        let class = MemoryClass::new()
            .field("count")
            .method("render", vec![])
            .method("on_click", vec![MemoryAnnotation::listen("click")]);

        let candidates = scan_members(&class).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].method_name, "on_click");
    }

    #[test]
    fn ignores_other_annotations() {
        let class = MemoryClass::new().method("update", vec![
            MemoryAnnotation::call("watch", RawListenArgs::new("value")),
            MemoryAnnotation::call("Listen", RawListenArgs::new("click")),
            MemoryAnnotation::marker("listen")
        ]);

        assert!(scan_members(&class).unwrap().is_empty());
    }

    #[test]
    fn first_listen_annotation_wins() {
        let class = MemoryClass::new().method("on_key", vec![
            MemoryAnnotation::listen("keydown"),
            MemoryAnnotation::listen("keyup")
        ]);

        let candidates = scan_members(&class).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].segment, "keydown");
    }

    #[test]
    fn fans_out_segments_in_order() {
        let class = MemoryClass::new()
            .method("a", vec![MemoryAnnotation::listen("click, scroll")])
            .method("b", vec![MemoryAnnotation::listen("resize")]);

        let segments: Vec<_> = scan_members(&class)
            .unwrap()
            .into_iter()
            .map(|c| (c.method_name, c.segment))
            .collect();
        assert_eq!(segments, [
            ("a".to_string(), "click".to_string()),
            ("a".to_string(), "scroll".to_string()),
            ("b".to_string(), "resize".to_string())
        ]);
    }
}
