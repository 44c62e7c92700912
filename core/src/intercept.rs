//! The interception primitive.
//!
//! [`intercept`] takes ownership of a constructed instance and returns a
//! [`Subscripted`] overlay. Integer reads on the overlay go to its
//! [`Delegate`]; everything else goes to the instance through `Deref`.
//!
//! ```
//! use subscriptable_core::{Accessor, At, Read, intercept};
//!
//! struct Ring(Vec<char>);
//!
//! impl At for Ring {
//!     type Element = char;
//!
//!     fn at(&self, index: i64) -> Option<&char> {
//!         let len = self.0.len() as i64;
//!         self.0.get(usize::try_from(index.rem_euclid(len)).ok()?)
//!     }
//! }
//!
//! let ring = intercept(Ring(vec!['a', 'b', 'c']), Accessor);
//!
//! assert_eq!(ring[4], 'b');
//! assert_eq!(ring.read("-1"), Read::Element(Some(&'c')));
//! assert_eq!(ring.read("len"), Read::Property("len"));
//! assert_eq!(ring.0.len(), 3);
//! ```

use core::any::type_name;
use core::borrow::{Borrow, BorrowMut};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index};

use crate::delegate::Delegate;
use crate::error::Error;
use crate::key::Key;
use crate::ToString;

/// Wrap a constructed instance so that integer reads go through `delegate`.
pub fn intercept<T, D: Delegate<T>>(instance: T, delegate: D) -> Subscripted<T, D> {
    tracing::trace!(target_type = type_name::<T>(), "intercepting instance");
    Subscripted {
        target: instance,
        delegate,
    }
}

/// An instance with integer subscripts.
///
/// Owns exactly one instance of `T`, reachable through `Deref`, `AsRef`,
/// `Borrow` and their mutable forms, or taken back with
/// [`into_inner`](Self::into_inner).
///
/// `Debug`, `Display`, `PartialEq`, `Eq` and `Hash` look at the instance only,
/// the delegate is configuration and does not take part.
pub struct Subscripted<T, D> {
    target: T,
    delegate: D,
}

/// The outcome of a keyed read.
#[derive(Debug, PartialEq, Eq)]
pub enum Read<'a, 'k, E: ?Sized> {
    /// The key is an integer and was routed to the delegate.
    Element(Option<&'a E>),
    /// The key names an ordinary member. Use it on the instance directly.
    Property(&'k str),
}

// Manual impls to avoid E: Clone/Copy bounds.
impl<E: ?Sized> Clone for Read<'_, '_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for Read<'_, '_, E> {}

impl<'a, E: ?Sized> Read<'a, '_, E> {
    /// The routed element, if the key was an integer and had one.
    pub fn element(self) -> Option<&'a E> {
        match self {
            Read::Element(element) => element,
            Read::Property(_) => None,
        }
    }
}

impl<T, D> Subscripted<T, D> {
    /// The delegate integer reads are routed through.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Unwrap, returning the instance.
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T, D: Delegate<T>> Subscripted<T, D> {
    /// Read the element at an integer index.
    ///
    /// Returns `None` when the delegate has no element there, and for
    /// indices that do not fit in an `i64`.
    pub fn get<I: TryInto<i64>>(&self, index: I) -> Option<&D::Element> {
        let index = index.try_into().ok()?;
        let element = self.delegate.element(&self.target, index);
        tracing::trace!(
            target_type = type_name::<T>(),
            index,
            found = element.is_some(),
            "routed subscript"
        );
        element
    }

    /// Read a property key.
    ///
    /// Integer keys (including numerals such as `"2"` or `"2.0"`) are routed
    /// to the delegate. Any other key falls through: the result names the
    /// member to use on the instance instead.
    pub fn read<'k>(&self, key: impl Into<Key<'k>>) -> Read<'_, 'k, D::Element> {
        match key.into() {
            Key::Index(index) => Read::Element(self.get(index)),
            Key::Property(name) => {
                tracing::trace!(
                    target_type = type_name::<T>(),
                    property = name,
                    "property read falls through"
                );
                Read::Property(name)
            }
        }
    }

    /// Like [`read`](Self::read), but a missing element or a non-integer key
    /// is an error.
    pub fn try_get<'k>(&self, key: impl Into<Key<'k>>) -> Result<&D::Element, Error> {
        match key.into() {
            Key::Index(index) => self.get(index).ok_or(Error::NoElement { index }),
            Key::Property(name) => Err(Error::NotAnIndex {
                key: name.to_string(),
            }),
        }
    }
}

impl<T, D: Delegate<T>> Index<usize> for Subscripted<T, D> {
    type Output = D::Element;

    /// # Panics
    ///
    /// Panics if the delegate has no element at `index`.
    fn index(&self, index: usize) -> &D::Element {
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "{}",
                Error::NoElement {
                    index: i64::try_from(index).unwrap_or(i64::MAX),
                }
            ),
        }
    }
}

impl<T, D> Deref for Subscripted<T, D> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.target
    }
}

impl<T, D> DerefMut for Subscripted<T, D> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

impl<T, D> AsRef<T> for Subscripted<T, D> {
    fn as_ref(&self) -> &T {
        &self.target
    }
}

impl<T, D> AsMut<T> for Subscripted<T, D> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

impl<T, D> Borrow<T> for Subscripted<T, D> {
    fn borrow(&self) -> &T {
        &self.target
    }
}

impl<T, D> BorrowMut<T> for Subscripted<T, D> {
    fn borrow_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

// --- Forwarded to the instance ---

impl<T: fmt::Debug, D> fmt::Debug for Subscripted<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.target, f)
    }
}

impl<T: fmt::Display, D> fmt::Display for Subscripted<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.target, f)
    }
}

impl<T: PartialEq, D> PartialEq for Subscripted<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<T: Eq, D> Eq for Subscripted<T, D> {}

impl<T: Hash, D> Hash for Subscripted<T, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target.hash(state)
    }
}

// A zero-sized delegate costs nothing.
static_assertions::assert_eq_size!(
    Subscripted<alloc::vec::Vec<u8>, crate::delegate::Accessor>,
    alloc::vec::Vec<u8>
);
static_assertions::assert_eq_size!(Subscripted<[u64; 4], crate::delegate::Passthrough>, [u64; 4]);

#[cfg(test)]
#[path = "intercept_test.rs"]
mod intercept_test;
