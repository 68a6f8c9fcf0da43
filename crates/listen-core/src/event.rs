// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Event-name grammar.
//!
//! A single event-name segment has the shape
//!
//! ```text
//! segment := [prefix ':'] core ['.' suffix]
//! ```
//!
//! where `prefix` selects the binding target ([`ElementRef`]) and `suffix`
//! restricts the handler to one key ([`KeyCode`]).
//!
//! # Examples
//!
//! ```
//! use listen_core::event::{ElementRef, KeyCode, parse_event_spec};
//!
//! let spec = parse_event_spec("body:keydown.enter").unwrap();
//! assert_eq!(spec.target, Some(ElementRef::Body));
//! assert_eq!(spec.name, "keydown");
//! assert_eq!(spec.key, Some(KeyCode::Enter));
//!
//! assert!(parse_event_spec("a:b:c").is_err());
//! ```

use std::fmt;

use crate::{
    error::{ListenError, Result},
    tables::{element_ref, keycode}
};

/// Binding target selected by an element-reference prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    /// `child:`
    Child,
    /// `parent:`
    Parent,
    /// `body:`
    Body,
    /// `document:`
    Document,
    /// `window:`
    Window
}

impl ElementRef {
    /// The prefix as written in an event name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Parent => "parent",
            Self::Body => "body",
            Self::Document => "document",
            Self::Window => "window"
        }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named key selected by a keycode suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// `.enter`
    Enter,
    /// `.escape`
    Escape,
    /// `.space`
    Space,
    /// `.tab`
    Tab,
    /// `.up`
    Up,
    /// `.right`
    Right,
    /// `.down`
    Down,
    /// `.left`
    Left
}

impl KeyCode {
    /// The suffix as written in an event name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Escape => "escape",
            Self::Space => "space",
            Self::Tab => "tab",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left"
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decomposed event-name segment.
///
/// `name` is the normalized core name: lowercased, trimmed, with prefix and
/// suffix stripped. It drives the passive-default lookup and is never what
/// ends up in [`ListenerMeta::event_name`](crate::ListenerMeta), which keeps
/// the authored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSpec {
    /// Element-reference prefix, if any.
    pub target: Option<ElementRef>,

    /// Normalized core event name.
    pub name: String,

    /// Keycode suffix, if any.
    pub key: Option<KeyCode>
}

/// Validate and decompose a single event-name segment.
///
/// The colon is checked before the period, so `"a:b:c.d.e"` reports
/// [`ListenError::TooManyColons`]. An empty core name (`"window:"`) is
/// accepted.
///
/// # Errors
///
/// - [`ListenError::TooManyColons`] for more than one `:`
/// - [`ListenError::InvalidPrefix`] for an unknown element-reference prefix
/// - [`ListenError::TooManyPeriods`] for more than one `.`
/// - [`ListenError::InvalidSuffix`] for an unknown keycode suffix
pub fn parse_event_spec(segment: &str) -> Result<EventSpec> {
    let (target, working) = split_prefix(segment)?;
    let (name, key) = split_suffix(segment, working)?;

    Ok(EventSpec {
        target,
        name: name.trim().to_lowercase(),
        key
    })
}

fn split_prefix(segment: &str) -> Result<(Option<ElementRef>, &str)> {
    let mut parts = segment.split(':');
    let first = parts.next().unwrap_or_default();
    let Some(rest) = parts.next() else {
        return Ok((None, first));
    };
    if parts.next().is_some() {
        return Err(ListenError::TooManyColons {
            segment: segment.to_string()
        });
    }

    let prefix = first.trim().to_lowercase();
    match element_ref(&prefix) {
        Some(target) => Ok((Some(target), rest)),
        None => Err(ListenError::InvalidPrefix {
            prefix,
            segment: segment.to_string()
        })
    }
}

fn split_suffix<'a>(segment: &str, working: &'a str) -> Result<(&'a str, Option<KeyCode>)> {
    let mut parts = working.split('.');
    let first = parts.next().unwrap_or_default();
    let Some(rest) = parts.next() else {
        return Ok((first, None));
    };
    if parts.next().is_some() {
        return Err(ListenError::TooManyPeriods {
            segment: segment.to_string()
        });
    }

    let suffix = rest.trim().to_lowercase();
    match keycode(&suffix) {
        Some(key) => Ok((first, Some(key))),
        None => Err(ListenError::InvalidSuffix {
            suffix,
            segment: segment.to_string()
        })
    }
}
