// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod ui {
    pub use listen_derive as listen;
}

use listen_derive::listeners;

struct Slider;

#[listeners(crate = "crate::ui::listen")]
impl Slider {
    #[listen("touchmove", passive = false)]
    fn on_drag(&self) {}
}

fn main() {
    let records = Slider::listeners();
    assert!(!records[0].event_passive);
}
