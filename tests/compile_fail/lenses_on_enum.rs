//! Deriving Lenses on an enum is rejected.

#![allow(dead_code)]

use lensed::Lenses;

#[derive(Lenses)]
enum Shape {
    Circle(f64),
}

fn main() {}
