// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Grammar violations raised while validating `#[listen]` event names.
//!
//! Every variant carries the offending segment exactly as it was authored
//! (after the per-segment trim), so callers can report it verbatim.

use thiserror::Error;

/// Result alias for event-name validation.
pub type Result<T, E = ListenError> = std::result::Result<T, E>;

/// A malformed event-name segment.
///
/// All variants are hard authoring errors: there is no recovery and no
/// partial result. The scan of the enclosing impl block stops at the first
/// one.
///
/// | Variant | Trigger |
/// |---------|---------|
/// | `TooManyColons` | `"a:b:c"` |
/// | `InvalidPrefix` | `"foo:click"` |
/// | `TooManyPeriods` | `"click.a.b"` |
/// | `InvalidSuffix` | `"click.middle"` |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenError {
    /// The segment contains more than one `:`.
    #[error("#[listen] can only contain one colon: {segment}")]
    TooManyColons {
        /// Offending segment.
        segment: String
    },

    /// The element-reference prefix is not one of the known targets.
    #[error("invalid #[listen] prefix \"{prefix}\" for \"{segment}\"")]
    InvalidPrefix {
        /// Rejected prefix, lowercased and trimmed.
        prefix:  String,
        /// Offending segment.
        segment: String
    },

    /// The segment contains more than one `.`.
    #[error("#[listen] can only contain one period: {segment}")]
    TooManyPeriods {
        /// Offending segment.
        segment: String
    },

    /// The keycode suffix is not one of the known keys.
    #[error("invalid #[listen] suffix \"{suffix}\" for \"{segment}\"")]
    InvalidSuffix {
        /// Rejected suffix, lowercased and trimmed.
        suffix:  String,
        /// Offending segment.
        segment: String
    }
}

impl ListenError {
    /// The segment that failed validation.
    #[must_use]
    pub fn segment(&self) -> &str {
        match self {
            Self::TooManyColons { segment }
            | Self::InvalidPrefix { segment, .. }
            | Self::TooManyPeriods { segment }
            | Self::InvalidSuffix { segment, .. } => segment
        }
    }

    /// Short machine-readable name of the violation.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TooManyColons { .. } => "TooManyColons",
            Self::InvalidPrefix { .. } => "InvalidPrefix",
            Self::TooManyPeriods { .. } => "TooManyPeriods",
            Self::InvalidSuffix { .. } => "InvalidSuffix"
        }
    }
}
