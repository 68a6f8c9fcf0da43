// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use listen_derive::{ListenerMeta, listeners};

struct Canvas;

#[listeners(fn_name = "event_bindings")]
impl Canvas {
    #[listen("pointerdown", capture)]
    fn on_pointer(&self) {}

    const SIZE: u32 = 64;
}

fn main() {
    let records: Vec<ListenerMeta> = Canvas::event_bindings();
    assert!(records[0].event_capture);
    assert_eq!(Canvas::SIZE, 64);
}
