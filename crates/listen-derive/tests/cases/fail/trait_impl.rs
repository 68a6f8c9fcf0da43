// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use listen_derive::listeners;

trait Clickable {
    fn on_click(&self);
}

struct Menu;

#[listeners]
impl Clickable for Menu {
    #[listen("click")]
    fn on_click(&self) {}
}

fn main() {
    Menu.on_click();
}
