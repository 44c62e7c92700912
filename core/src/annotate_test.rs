use alloc::string::{String, ToString};
use alloc::vec::Vec;

use pretty_assertions::assert_eq;

use super::{Subscriptable, annotate};
use crate::class::wrap;
use crate::delegate::{Accessor, At, Delegate};
use crate::field;
use crate::intercept::Read;
use crate::test_utils::init_test_logging;

struct Queue {
    data: Vec<u16>,
    name: String,
}

impl Queue {
    fn new(name: &str) -> Self {
        Queue {
            data: Vec::new(),
            name: name.to_string(),
        }
    }

    fn push(&mut self, values: &[u16]) {
        self.data.extend_from_slice(values);
    }
}

impl At for Queue {
    type Element = u16;

    fn at(&self, index: i64) -> Option<&u16> {
        self.data.get(usize::try_from(index).ok()?)
    }
}

/// Routes to `data` without a closure, the way `#[subscriptable(field = ..)]` does.
#[derive(Debug, Clone, Copy, Default)]
struct QueueData;

impl Delegate<Queue> for QueueData {
    type Element = u16;

    fn element<'a>(&self, target: &'a Queue, index: i64) -> Option<&'a u16> {
        crate::Sequence::element(&target.data, index)
    }
}

impl Subscriptable for Queue {
    type Delegate = QueueData;
}

#[test]
fn test_annotate_matches_wrap() {
    init_test_logging();

    let annotated = annotate(field!(Queue, data))(Queue::new);
    let wrapped = wrap(Queue::new, field!(Queue, data));

    let mut a = annotated.construct(("a",));
    let mut b = wrapped.construct(("b",));
    a.push(&[1, 2, 3]);
    b.push(&[1, 2, 3]);

    for index in 0..5 {
        assert_eq!(a.get(index), b.get(index));
    }
    assert_eq!(a.name, "a");
    assert_eq!(annotated.delegate().name(), wrapped.delegate().name());
}

#[test]
fn test_annotation_can_be_applied_repeatedly() {
    let subscripts = annotate(Accessor);
    let first = subscripts(Queue::new);
    let second = subscripts(Queue::new);

    let mut x = first.construct(("first",));
    let y = second.construct(("second",));
    x.push(&[9]);

    assert_eq!(x.get(0), Some(&9));
    assert_eq!(y.get(0), None);
    assert_eq!(y.name, "second");
}

#[test]
fn test_declared_delegate_on_instances() {
    let mut queue = Queue::new("jobs").subscripted();
    assert_eq!(queue.read("0"), Read::Element(None));

    queue.push(&[0, 1, 2]);
    assert_eq!(queue[0], 0);
    assert_eq!(queue[2], 2);
    assert_eq!(queue.read("3"), Read::Element(None));
    assert_eq!(queue.read("name"), Read::Property("name"));
    assert_eq!(queue.name, "jobs");
}

#[test]
fn test_declared_delegate_on_constructors() {
    let queues = Queue::class(Queue::new);
    let mut queue = queues.construct(("jobs",));
    queue.push(&[5]);

    assert_eq!(queue.get(0), Some(&5));
    assert_eq!(queue.at(0), Some(&5));
}
