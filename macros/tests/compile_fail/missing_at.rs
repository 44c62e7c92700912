//! Test: Without `field`, the struct must implement `At`.
#![allow(dead_code)]

use subscriptable::subscriptable;

#[subscriptable]
struct Plain {
    values: Vec<u8>,
}

fn main() {}
