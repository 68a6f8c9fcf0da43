// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use listen_derive::listeners;

struct Button;

#[listeners]
impl Button {
    #[listen("click")]
    fn on_click(&self) {}
}

fn main() {
    let records = Button::listeners();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].event_name, "click");
    Button.on_click();
}
