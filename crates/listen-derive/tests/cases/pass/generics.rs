// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::marker::PhantomData;

use listen_derive::listeners;

struct List<T> {
    _items: PhantomData<T>
}

#[listeners]
impl<T> List<T>
where
    T: Clone
{
    #[listen("scroll")]
    fn on_scroll(&self) {}

    #[listen("parent:keydown.down, parent:keydown.up")]
    fn on_arrow(&self) {}
}

fn main() {
    let records = List::<String>::listeners();
    assert_eq!(records.len(), 3);
    assert!(records[0].event_passive);
}
