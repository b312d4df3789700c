//! Deriving Lenses on a tuple struct is rejected.

#![allow(dead_code)]

use lensed::Lenses;

#[derive(Lenses)]
struct Meters(f64);

fn main() {}
