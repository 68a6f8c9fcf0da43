// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata assembly.
//!
//! Turns scanner candidates into [`ListenerMeta`] records: each segment is
//! parsed, its options resolved against the normalized name, and the record
//! is built from the authored segment. The first grammar violation aborts
//! the whole class.

use tracing::{debug, trace};

use crate::{
    event::parse_event_spec,
    meta::ListenerMeta,
    scan::{AnalysisService, ListenCandidate, scan_members}
};

/// Validate candidates and build records in encounter order.
///
/// # Errors
///
/// The first grammar violation, wrapped by
/// [`AnalysisService::grammar_error`].
pub fn assemble<'a, S>(
    service: &'a S,
    candidates: Vec<ListenCandidate<'a, S>>
) -> Result<Vec<ListenerMeta<S::Docs>>, S::Error>
where
    S: AnalysisService + ?Sized
{
    let mut records = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let spec = match parse_event_spec(&candidate.segment) {
            Ok(spec) => spec,
            Err(err) => {
                debug!(
                    method = %candidate.method_name,
                    segment = %candidate.segment,
                    kind = err.kind(),
                    "rejected listener event name"
                );
                return Err(service.grammar_error(candidate.annotation, err));
            }
        };

        let options = candidate.options.resolve(&spec.name);
        trace!(
            method = %candidate.method_name,
            event = %candidate.segment,
            capture = options.capture,
            passive = options.passive,
            disabled = options.disabled,
            "listener"
        );

        records.push(ListenerMeta::new(
            candidate.segment,
            candidate.method_name,
            options,
            candidate.documentation
        ));
    }

    Ok(records)
}

/// Scan a class and assemble its listener records.
///
/// Records come out in member declaration order, then left-to-right
/// segment order.
///
/// # Errors
///
/// Argument extraction failures and the first grammar violation.
pub fn collect_listeners<S>(service: &S) -> Result<Vec<ListenerMeta<S::Docs>>, S::Error>
where
    S: AnalysisService + ?Sized
{
    let candidates = scan_members(service)?;
    assemble(service, candidates)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        error::ListenError,
        options::ListenOptions,
        testing::{MemoryAnnotation, MemoryClass}
    };

    fn single(event_names: &str, options: ListenOptions) -> MemoryClass {
        MemoryClass::new().method("handler", vec![MemoryAnnotation::listen_with(
            event_names,
            options
        )])
    }

    #[test]
    fn plain_event_defaults() {
        let records = collect_listeners(&single("click", ListenOptions::new())).unwrap();
        assert_eq!(records, vec![ListenerMeta {
            event_name:        "click".to_string(),
            event_method_name: "handler".to_string(),
            event_capture:     false,
            event_passive:     false,
            event_disabled:    false,
            documentation:     None
        }]);
    }

    #[test]
    fn mouseover_is_passive() {
        let records = collect_listeners(&single("mouseover", ListenOptions::new())).unwrap();
        assert!(records[0].event_passive);
    }

    #[test]
    fn prefixed_name_keeps_authored_text() {
        let records = collect_listeners(&single("Window:Resize", ListenOptions::new())).unwrap();
        assert_eq!(records[0].event_name, "Window:Resize");
        assert!(records[0].event_passive);
    }

    #[test]
    fn prefix_and_suffix_combined() {
        let records = collect_listeners(&single("body:click.enter", ListenOptions::new())).unwrap();
        assert_eq!(records[0].event_name, "body:click.enter");
        assert!(!records[0].event_passive);
    }

    #[test]
    fn enabled_flag_asymmetry() {
        let off = collect_listeners(&single("click", ListenOptions::new().enabled(false))).unwrap();
        let on = collect_listeners(&single("click", ListenOptions::new().enabled(true))).unwrap();
        let omitted = collect_listeners(&single("click", ListenOptions::new())).unwrap();
        assert!(off[0].event_disabled);
        assert!(!on[0].event_disabled);
        assert!(!omitted[0].event_disabled);
    }

    #[test]
    fn comma_list_yields_ordered_records() {
        let records = collect_listeners(&single("click,scroll", ListenOptions::new())).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.event_name.as_str()).collect();
        assert_eq!(names, ["click", "scroll"]);
        assert!(!records[0].event_passive);
        assert!(records[1].event_passive);
    }

    #[test]
    fn double_comma_is_absorbed() {
        let records = collect_listeners(&single("click,,scroll", ListenOptions::new())).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.event_name.as_str()).collect();
        assert_eq!(names, ["click", "scroll"]);
    }

    #[test]
    fn options_apply_to_every_segment() {
        let records =
            collect_listeners(&single("keydown, keyup", ListenOptions::new().capture(true)))
                .unwrap();
        assert!(records.iter().all(|r| r.event_capture));
    }

    #[test]
    fn documentation_attached_per_record() {
        let class = MemoryClass::new().documented_method("on_drag", "Tracks dragging.", vec![
            MemoryAnnotation::listen("drag, drop"),
        ]);
        let records = collect_listeners(&class).unwrap();
        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.documentation.as_deref(), Some("Tracks dragging."));
        }
    }

    #[test]
    fn member_order_then_segment_order() {
        let class = MemoryClass::new()
            .method("first", vec![MemoryAnnotation::listen("b, a")])
            .field("state")
            .method("second", vec![MemoryAnnotation::listen("c")]);
        let records = collect_listeners(&class).unwrap();
        let pairs: Vec<_> = records
            .iter()
            .map(|r| (r.event_method_name.as_str(), r.event_name.as_str()))
            .collect();
        assert_eq!(pairs, [("first", "b"), ("first", "a"), ("second", "c")]);
    }

    #[test]
    fn first_violation_aborts_class() {
        let class = MemoryClass::new()
            .method("ok", vec![MemoryAnnotation::listen("click")])
            .method("bad", vec![MemoryAnnotation::listen("click.middle, foo:bar")])
            .method("later", vec![MemoryAnnotation::listen("a:b:c")]);
        let err = collect_listeners(&class).unwrap_err();
        assert_eq!(err, ListenError::InvalidSuffix {
            suffix:  "middle".into(),
            segment: "click.middle".into()
        });
    }

    #[test]
    fn each_violation_kind_surfaces() {
        let cases = [
            ("a:b:c", "TooManyColons"),
            ("foo:click", "InvalidPrefix"),
            ("click.a.b", "TooManyPeriods"),
            ("click.middle", "InvalidSuffix")
        ];
        for (segment, kind) in cases {
            let err = collect_listeners(&single(segment, ListenOptions::new())).unwrap_err();
            assert_eq!(err.kind(), kind, "{segment}");
            assert_eq!(err.segment(), segment);
        }
    }

    #[test]
    fn option_free_class_is_empty() {
        assert!(collect_listeners(&MemoryClass::new()).unwrap().is_empty());
    }
}
