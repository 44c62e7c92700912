//! Attaching subscripts where a type is defined.
//!
//! Two forms, both ending up in [`wrap`]:
//!
//! - [`annotate`] curries a delegate into a function from constructors to
//!   [`Class`]es, so the configuration can be written once and applied to a
//!   constructor later.
//! - The [`Subscriptable`] trait records a type's delegate on the type
//!   itself. `#[subscriptable]` implements it at the definition site.

use crate::class::{Class, wrap};
use crate::delegate::Delegate;
use crate::intercept::{Subscripted, intercept};

/// Capture a delegate and return the wrapping step as a function.
///
/// `annotate(delegate)(constructor)` is the same as
/// `wrap(constructor, delegate)`.
///
/// ```
/// use subscriptable_core::{Accessor, At, annotate};
///
/// struct Stack(Vec<i32>);
///
/// impl At for Stack {
///     type Element = i32;
///
///     fn at(&self, index: i64) -> Option<&i32> {
///         self.0.get(usize::try_from(index).ok()?)
///     }
/// }
///
/// let stacks = annotate(Accessor)(|| Stack(vec![1, 2]));
/// assert_eq!(stacks.construct(())[1], 2);
/// ```
pub fn annotate<C, D: Clone>(delegate: D) -> impl Fn(C) -> Class<C, D> {
    move |constructor| wrap(constructor, delegate.clone())
}

/// A type that declares how integer subscripts on it are routed.
///
/// Usually implemented by `#[subscriptable]`. A hand-written implementation
/// only has to name the delegate type:
///
/// ```
/// use subscriptable_core::{Accessor, At, Subscriptable};
///
/// struct Word(Vec<char>);
///
/// impl At for Word {
///     type Element = char;
///
///     fn at(&self, index: i64) -> Option<&char> {
///         self.0.get(usize::try_from(index).ok()?)
///     }
/// }
///
/// impl Subscriptable for Word {
///     type Delegate = Accessor;
/// }
///
/// let word = Word("hey".chars().collect()).subscripted();
/// assert_eq!(word[1], 'e');
///
/// let words = Word::class(|s: &str| Word(s.chars().collect()));
/// assert_eq!(words.construct(("yo",)).get(0), Some(&'y'));
/// ```
pub trait Subscriptable: Sized {
    type Delegate: Delegate<Self> + Default + Clone;

    /// Wrap this instance.
    fn subscripted(self) -> Subscripted<Self, Self::Delegate> {
        intercept(self, Self::Delegate::default())
    }

    /// Wrap a constructor of this type.
    fn class<C>(constructor: C) -> Class<C, Self::Delegate> {
        wrap(constructor, Self::Delegate::default())
    }
}

#[cfg(test)]
#[path = "annotate_test.rs"]
mod annotate_test;
