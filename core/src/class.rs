//! The construction wrapper.
//!
//! [`wrap`] pairs a constructor with a delegate. Every construction through
//! the resulting [`Class`] runs the constructor unchanged and hands the new
//! instance to [`intercept`].
//!
//! ```
//! use subscriptable_core::{field, wrap};
//!
//! struct Grid {
//!     cells: Vec<u8>,
//!     width: usize,
//! }
//!
//! impl Grid {
//!     fn new(width: usize, height: usize) -> Self {
//!         Grid { cells: vec![0; width * height], width }
//!     }
//! }
//!
//! let grids = wrap(Grid::new, field!(Grid, cells));
//! let grid = grids.construct((3, 2));
//!
//! assert_eq!(grid.width, 3);
//! assert_eq!(grid.get(5), Some(&0));
//! assert_eq!(grid.get(6), None);
//! ```

use core::any::type_name;
use core::fmt;

use crate::delegate::Delegate;
use crate::intercept::{Subscripted, intercept};

/// A constructor taking its arguments as a tuple.
///
/// Implemented for every `Fn` of up to six arguments, so plain associated
/// functions such as `Type::new` qualify.
pub trait Constructor<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_constructor {
    ($(($($arg:ident),*)),* $(,)?) => {
        $(
            impl<F, R, $($arg),*> Constructor<($($arg,)*)> for F
            where
                F: Fn($($arg),*) -> R,
            {
                type Output = R;

                #[allow(non_snake_case)]
                fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> R {
                    (self)($($arg),*)
                }
            }
        )*
    };
}

impl_constructor!(
    (),
    (A1),
    (A1, A2),
    (A1, A2, A3),
    (A1, A2, A3, A4),
    (A1, A2, A3, A4, A5),
    (A1, A2, A3, A4, A5, A6),
);

/// Wrap a constructor so that the instances it builds have integer subscripts.
pub fn wrap<C, D>(constructor: C, delegate: D) -> Class<C, D> {
    tracing::debug!(
        constructor = type_name::<C>(),
        delegate = type_name::<D>(),
        "wrapping class"
    );
    Class {
        constructor,
        delegate,
    }
}

/// A constructor whose instances come out [`Subscripted`].
///
/// The original constructor is kept as is and stays reachable through
/// [`constructor`](Self::constructor). Associated items of the constructed
/// type are not affected.
#[derive(Clone, Copy)]
pub struct Class<C, D> {
    constructor: C,
    delegate: D,
}

// Constructors are usually fn items or closures, which have no `Debug`.
impl<C, D> fmt::Debug for Class<C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("constructor", &type_name::<C>())
            .field("delegate", &type_name::<D>())
            .finish()
    }
}

impl<C, D> Class<C, D> {
    pub fn constructor(&self) -> &C {
        &self.constructor
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }
}

impl<C, D: Clone> Class<C, D> {
    /// Build a new instance and wrap it.
    ///
    /// Each call builds an independent instance with its own copy of the
    /// delegate.
    pub fn construct<Args>(&self, args: Args) -> Subscripted<C::Output, D>
    where
        C: Constructor<Args>,
        D: Delegate<C::Output>,
    {
        let instance = self.constructor.invoke(args);
        tracing::debug!(target_type = type_name::<C::Output>(), "constructed instance");
        intercept(instance, self.delegate.clone())
    }

    /// Build a new instance with a fallible constructor and wrap it.
    ///
    /// The constructor's error is returned unchanged.
    pub fn try_construct<Args, T, E>(&self, args: Args) -> Result<Subscripted<T, D>, E>
    where
        C: Constructor<Args, Output = Result<T, E>>,
        D: Delegate<T>,
    {
        let instance = self.constructor.invoke(args)?;
        tracing::debug!(target_type = type_name::<T>(), "constructed instance");
        Ok(intercept(instance, self.delegate.clone()))
    }
}

#[cfg(test)]
#[path = "class_test.rs"]
mod class_test;
