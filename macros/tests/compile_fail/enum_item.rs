//! Test: The attribute only applies to structs.
#![allow(dead_code)]

use subscriptable::subscriptable;

#[subscriptable]
enum Shape { Dot }

fn main() {}
