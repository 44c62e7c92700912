//! Test: The delegate field must be a sequence.
#![allow(dead_code)]

use subscriptable::subscriptable;

#[subscriptable(field = label)]
struct Tagged {
    label: String,
}

fn main() {}
