// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Listener metadata records.

use crate::options::EffectiveOptions;

/// Documentation attached to a listener method.
///
/// Produced by the syn-backed analysis service; other services may use
/// any documentation type through [`ListenerMeta`]'s type parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDocs {
    /// Method name.
    pub name: String,

    /// Joined doc comments, `None` when the method has none.
    pub docs: Option<String>,

    /// Rendered method signature.
    pub signature: String
}

/// One event binding declared by a `#[listen]` attribute.
///
/// A single attribute yields one record per non-empty comma-separated
/// segment.
///
/// # Fields
///
/// | Field | Source |
/// |-------|--------|
/// | `event_name` | authored segment, trimmed, case preserved |
/// | `event_method_name` | annotated method |
/// | `event_capture` | `capture` option |
/// | `event_passive` | `passive` option or passive-default table |
/// | `event_disabled` | `enabled = false` |
/// | `documentation` | analysis service |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ListenerMeta<D = MethodDocs> {
    /// Event name exactly as authored (per-segment trim only).
    pub event_name: String,

    /// Name of the method to invoke.
    pub event_method_name: String,

    /// Capture-phase binding.
    pub event_capture: bool,

    /// Passive binding.
    pub event_passive: bool,

    /// Listener starts disabled.
    pub event_disabled: bool,

    /// Opaque documentation blob.
    pub documentation: D
}

impl<D> ListenerMeta<D> {
    /// Build a record from its parts.
    pub fn new(
        event_name: impl Into<String>,
        event_method_name: impl Into<String>,
        options: EffectiveOptions,
        documentation: D
    ) -> Self {
        Self {
            event_name: event_name.into(),
            event_method_name: event_method_name.into(),
            event_capture: options.capture,
            event_passive: options.passive,
            event_disabled: options.disabled,
            documentation
        }
    }

    /// The resolved flags of this record.
    #[must_use]
    pub const fn options(&self) -> EffectiveOptions {
        EffectiveOptions {
            capture:  self.event_capture,
            passive:  self.event_passive,
            disabled: self.event_disabled
        }
    }

    /// Replace the documentation, keeping everything else.
    pub fn map_documentation<E>(self, f: impl FnOnce(D) -> E) -> ListenerMeta<E> {
        ListenerMeta {
            event_name:        self.event_name,
            event_method_name: self.event_method_name,
            event_capture:     self.event_capture,
            event_passive:     self.event_passive,
            event_disabled:    self.event_disabled,
            documentation:     f(self.documentation)
        }
    }
}
