// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static reference tables.
//!
//! Built at compile time with [`phf`]; read-only for the lifetime of the
//! process. Keys are lowercase, so callers normalize before lookup.

use phf::{Map, Set, phf_map, phf_set};

use crate::event::{ElementRef, KeyCode};

/// Events that bind as passive unless `passive` is set explicitly.
pub static PASSIVE_DEFAULTS: Set<&'static str> = phf_set! {
    "dragstart", "drag", "dragend", "dragenter", "dragover", "dragleave", "drop",
    "mouseenter", "mouseover", "mousemove", "mousedown", "mouseup", "mouseleave",
    "mouseout", "mousewheel",
    "pointerover", "pointerenter", "pointerdown", "pointermove", "pointerup",
    "pointercancel", "pointerout", "pointerleave",
    "resize",
    "scroll",
    "touchstart", "touchmove", "touchend", "touchenter", "touchleave", "touchcancel",
    "wheel",
};

/// Valid element-reference prefixes (`window:resize`).
pub static ELEMENT_REF_PREFIXES: Map<&'static str, ElementRef> = phf_map! {
    "child" => ElementRef::Child,
    "parent" => ElementRef::Parent,
    "body" => ElementRef::Body,
    "document" => ElementRef::Document,
    "window" => ElementRef::Window,
};

/// Valid keycode suffixes (`keydown.enter`).
pub static KEYCODE_SUFFIXES: Map<&'static str, KeyCode> = phf_map! {
    "enter" => KeyCode::Enter,
    "escape" => KeyCode::Escape,
    "space" => KeyCode::Space,
    "tab" => KeyCode::Tab,
    "up" => KeyCode::Up,
    "right" => KeyCode::Right,
    "down" => KeyCode::Down,
    "left" => KeyCode::Left,
};

/// Check whether an event name binds as passive by default.
///
/// Case-insensitive.
#[must_use]
pub fn is_passive_default(name: &str) -> bool {
    PASSIVE_DEFAULTS.contains(name.to_lowercase().as_str())
}

/// Element reference for a prefix.
///
/// Expects an already normalized (lowercased, trimmed) prefix.
#[must_use]
pub fn element_ref(prefix: &str) -> Option<ElementRef> {
    ELEMENT_REF_PREFIXES.get(prefix).copied()
}

/// Keycode for a suffix.
///
/// Expects an already normalized (lowercased, trimmed) suffix.
#[must_use]
pub fn keycode(suffix: &str) -> Option<KeyCode> {
    KEYCODE_SUFFIXES.get(suffix).copied()
}
