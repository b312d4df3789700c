//! An unknown `#[lens(...)]` option is rejected.

#![allow(dead_code)]

use lensed::Lenses;

#[derive(Clone, Lenses)]
struct Person {
    #[lens(skip)]
    name: String,
}

fn main() {}
