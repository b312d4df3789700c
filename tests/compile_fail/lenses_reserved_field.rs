//! A field named after a bound lens method is rejected.

#![allow(dead_code)]

use lensed::Lenses;

#[derive(Clone, Lenses)]
struct Cache {
    get: u32,
    hits: u32,
}

fn main() {}
