// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use listen_derive::listeners;

struct Label;

#[listeners]
impl Label {
    #[inline]
    fn text(&self) -> &'static str {
        "label"
    }
}

fn main() {
    assert!(Label::listeners().is_empty());
    assert_eq!(Label.text(), "label");
}
