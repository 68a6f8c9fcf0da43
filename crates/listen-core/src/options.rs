// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Binding options and their resolution.
//!
//! Authors may set `capture`, `passive` and `enabled` on a `#[listen]`
//! attribute. Each is optional and only boolean values are honored;
//! anything else falls back to the default.
//!
//! | Option | Explicit boolean | Omitted / non-boolean |
//! |--------|------------------|-----------------------|
//! | `capture` | as given | `false` |
//! | `passive` | as given | `true` for passive-default events |
//! | `enabled` | `false` disables | enabled |

use crate::tables::is_passive_default;

/// A raw option value as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A boolean literal.
    Bool(bool),

    /// Any other literal, kept verbatim.
    Other(String)
}

impl OptionValue {
    /// The boolean, if this value is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Other(_) => None
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Explicit options from a `#[listen]` attribute.
///
/// Every field is optional. Use the builder methods to construct values
/// by hand:
///
/// ```
/// use listen_core::ListenOptions;
///
/// let options = ListenOptions::new().capture(true).enabled(false);
/// let resolved = options.resolve("click");
/// assert!(resolved.capture);
/// assert!(resolved.disabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenOptions {
    /// Capture-phase binding.
    pub capture: Option<OptionValue>,

    /// Passive binding.
    pub passive: Option<OptionValue>,

    /// Whether the listener starts enabled.
    pub enabled: Option<OptionValue>
}

impl ListenOptions {
    /// Options with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `capture`.
    #[must_use]
    pub fn capture(mut self, value: impl Into<OptionValue>) -> Self {
        self.capture = Some(value.into());
        self
    }

    /// Set `passive`.
    #[must_use]
    pub fn passive(mut self, value: impl Into<OptionValue>) -> Self {
        self.passive = Some(value.into());
        self
    }

    /// Set `enabled`.
    #[must_use]
    pub fn enabled(mut self, value: impl Into<OptionValue>) -> Self {
        self.enabled = Some(value.into());
        self
    }

    /// Compute the effective flags for a normalized core event name.
    ///
    /// Never fails. `disabled` is set only by an explicit `enabled = false`;
    /// an explicit `enabled = true` behaves exactly like omission.
    #[must_use]
    pub fn resolve(&self, event_name: &str) -> EffectiveOptions {
        let explicit = |value: &Option<OptionValue>| value.as_ref().and_then(OptionValue::as_bool);

        EffectiveOptions {
            capture:  explicit(&self.capture).unwrap_or(false),
            passive:  explicit(&self.passive).unwrap_or_else(|| is_passive_default(event_name)),
            disabled: explicit(&self.enabled) == Some(false)
        }
    }
}

/// Resolved binding flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveOptions {
    /// Fire during the capture phase.
    pub capture: bool,

    /// Handler never calls `preventDefault`.
    pub passive: bool,

    /// Listener starts disabled.
    pub disabled: bool
}
