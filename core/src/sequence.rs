//! The indexable capability of a delegate field.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// A sequence that integer subscripts can be routed to.
///
/// Indices are signed because any integer key is routed. Negative and
/// out-of-range indices yield `None`.
pub trait Sequence {
    type Element: ?Sized;

    fn len(&self) -> usize;

    fn element(&self, index: i64) -> Option<&Self::Element>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Sequence for [E] {
    type Element = E;

    fn len(&self) -> usize {
        <[E]>::len(self)
    }

    fn element(&self, index: i64) -> Option<&E> {
        self.get(usize::try_from(index).ok()?)
    }
}

impl<E, const N: usize> Sequence for [E; N] {
    type Element = E;

    fn len(&self) -> usize {
        N
    }

    fn element(&self, index: i64) -> Option<&E> {
        self.as_slice().element(index)
    }
}

impl<E> Sequence for Vec<E> {
    type Element = E;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&self, index: i64) -> Option<&E> {
        self.as_slice().element(index)
    }
}

impl<E> Sequence for VecDeque<E> {
    type Element = E;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn element(&self, index: i64) -> Option<&E> {
        self.get(usize::try_from(index).ok()?)
    }
}

/// An absent field has no elements.
impl<S: Sequence> Sequence for Option<S> {
    type Element = S::Element;

    fn len(&self) -> usize {
        self.as_ref().map_or(0, S::len)
    }

    fn element(&self, index: i64) -> Option<&S::Element> {
        self.as_ref()?.element(index)
    }
}

macro_rules! impl_sequence_for_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<S: Sequence + ?Sized> Sequence for $ptr<S> {
                type Element = S::Element;

                fn len(&self) -> usize {
                    (**self).len()
                }

                fn element(&self, index: i64) -> Option<&S::Element> {
                    (**self).element(index)
                }
            }
        )*
    };
}

impl_sequence_for_pointer!(Box, Rc, Arc);

impl<S: Sequence + ?Sized> Sequence for &S {
    type Element = S::Element;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn element(&self, index: i64) -> Option<&S::Element> {
        (**self).element(index)
    }
}
