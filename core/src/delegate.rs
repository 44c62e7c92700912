//! Routing strategies for integer subscripts.
//!
//! A [`Delegate`] decides what an integer read on a
//! [`Subscripted`](crate::Subscripted) value resolves to. Three strategies
//! ship with the crate:
//!
//! - [`Field`] reads the element out of a sequence field of the instance.
//! - [`Accessor`] calls the instance's element accessor, see [`At`].
//! - [`Passthrough`] never routes, every integer read has no value.
//!
//! `#[subscriptable(field = ..)]` generates a fourth kind: a unit struct that
//! reads a named field without storing a closure.

use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;

use crate::sequence::Sequence;

/// Resolves integer reads on a `T`.
pub trait Delegate<T: ?Sized> {
    type Element: ?Sized;

    fn element<'a>(&self, target: &'a T, index: i64) -> Option<&'a Self::Element>;
}

/// The element accessor of a type.
///
/// Implementing `At` is what makes a type usable with [`Accessor`]. The index
/// is passed through unchanged, so an implementation is free to give negative
/// indices a meaning.
pub trait At {
    type Element: ?Sized;

    fn at(&self, index: i64) -> Option<&Self::Element>;
}

/// Routes integer reads to a sequence field.
///
/// The field's type must not borrow (`S: 'static`), so `Vec<E>`, `Box<[E]>`,
/// arrays and `Rc`/`Arc` of those work while `&'a [E]` does not. For a
/// borrowed field use `#[subscriptable(field = ..)]`.
///
/// Usually built with the [`field!`](crate::field) macro:
///
/// ```
/// use subscriptable_core::{field, intercept};
///
/// struct Log {
///     lines: Vec<String>,
/// }
///
/// let log = intercept(Log { lines: vec!["boot".to_string()] }, field!(Log, lines));
/// assert_eq!(log.get(0).map(String::as_str), Some("boot"));
/// assert_eq!(log.delegate().name(), "lines");
/// ```
pub struct Field<T: ?Sized, S: ?Sized, F> {
    name: &'static str,
    project: F,
    _marker: PhantomData<fn(&T) -> &S>,
}

impl<T, S, F> Field<T, S, F>
where
    T: ?Sized,
    S: Sequence + ?Sized,
    F: for<'a> Fn(&'a T) -> &'a S,
{
    /// Create a field delegate from the field's name and a projection onto it.
    ///
    /// The name is only used for diagnostics.
    pub fn new(name: &'static str, project: F) -> Self {
        Field {
            name,
            project,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, S: ?Sized, F> Field<T, S, F> {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// --- Manual Clone/Copy/Debug to avoid T/S bounds ---

impl<T: ?Sized, S: ?Sized, F: Clone> Clone for Field<T, S, F> {
    fn clone(&self) -> Self {
        Field {
            name: self.name,
            project: self.project.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, S: ?Sized, F: Copy> Copy for Field<T, S, F> {}

impl<T: ?Sized, S: ?Sized, F> fmt::Debug for Field<T, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

// `S: 'static` makes `&'a S::Element` well-formed for every `'a`. Fields
// holding borrowed sequences go through the delegate `#[subscriptable]`
// generates instead.
impl<T, S, F> Delegate<T> for Field<T, S, F>
where
    T: ?Sized,
    S: Sequence + ?Sized + 'static,
    F: for<'a> Fn(&'a T) -> &'a S,
{
    type Element = S::Element;

    fn element<'a>(&self, target: &'a T, index: i64) -> Option<&'a S::Element> {
        (self.project)(target).element(index)
    }
}

/// Build a [`Field`] delegate for a named (or positional) field of a type.
///
/// ```
/// use subscriptable_core::{Delegate, field};
///
/// struct Pair(Vec<u8>, Vec<u8>);
///
/// let second = field!(Pair, 1);
/// assert_eq!(second.element(&Pair(vec![], vec![9]), 0), Some(&9));
/// ```
#[macro_export]
macro_rules! field {
    ($ty:ty, $field:tt) => {
        $crate::Field::new(::core::stringify!($field), |target: &$ty| &target.$field)
    };
}

/// Routes integer reads to the instance's [`At`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Accessor;

impl<T: At + ?Sized> Delegate<T> for Accessor {
    type Element = T::Element;

    fn element<'a>(&self, target: &'a T, index: i64) -> Option<&'a T::Element> {
        target.at(index)
    }
}

/// Never routes: every integer read has no value.
///
/// This is what a type without an element accessor resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Passthrough;

impl<T: ?Sized> Delegate<T> for Passthrough {
    type Element = Infallible;

    fn element<'a>(&self, _target: &'a T, _index: i64) -> Option<&'a Infallible> {
        None
    }
}

#[cfg(test)]
#[path = "delegate_test.rs"]
mod delegate_test;
