// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use listen_derive::listeners;

struct Menu;

#[listeners]
impl Menu {
    #[listen("click", once = true)]
    fn on_click(&self) {}
}

fn main() {
    let _ = Menu::listeners();
    Menu.on_click();
}
