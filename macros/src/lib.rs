//! Procedural macros for subscriptable types.
//!
//! - `#[subscriptable]` - Declare, on a struct, how integer subscripts on it
//!   are routed

extern crate proc_macro;

use proc_macro::TokenStream;

mod common;
mod subscriptable;

/// Declare how integer subscripts on a struct are routed.
///
/// The struct itself is emitted unchanged. The macro adds an implementation
/// of [`Subscriptable`], so instances gain `.subscripted()` and constructors
/// can be wrapped with `Type::class(Type::new)`.
///
/// [`Subscriptable`]: subscriptable_core::Subscriptable
///
/// # Element accessor
///
/// Without arguments, subscripts go through the type's [`At`] implementation.
/// A type without one fails to compile.
///
/// [`At`]: subscriptable_core::At
///
/// ```ignore
/// use subscriptable::{At, Subscriptable, subscriptable};
///
/// #[subscriptable]
/// struct Ring(Vec<u8>);
///
/// impl At for Ring {
///     type Element = u8;
///
///     fn at(&self, index: i64) -> Option<&u8> {
///         let len = self.0.len() as i64;
///         self.0.get(usize::try_from(index.checked_rem_euclid(len)?).ok()?)
///     }
/// }
///
/// let ring = Ring(vec![1, 2, 3]).subscripted();
/// assert_eq!(ring.get(-1), Some(&3));
/// ```
///
/// # Delegate field
///
/// With `field`, subscripts go to a field whose type implements [`Sequence`]:
///
/// [`Sequence`]: subscriptable_core::Sequence
///
/// ```ignore
/// #[subscriptable(field = data)]
/// struct Samples {
///     data: Vec<i64>,
///     name: String,
/// }
///
/// // Generated: `struct SamplesSubscript;` routing to `data`.
/// let samples = Samples::class(Samples::new).construct(("left",));
/// ```
///
/// Tuple structs name the field by position: `#[subscriptable(field = 0)]`.
///
/// # Optional Attributes
///
/// - `delegate`: Name of the generated delegate struct (default: `<Type>Subscript`).
///   Only meaningful together with `field`.
/// - `crate`: Path to the runtime crate (default: `::subscriptable`).
///
/// ```ignore
/// #[subscriptable(field = cells, delegate = Cells, crate = ::subscriptable_core)]
/// struct Grid {
///     cells: Vec<u8>,
/// }
/// ```
///
/// # Restrictions
///
/// - Only structs are supported
/// - Each argument can be given at most once
#[proc_macro_attribute]
pub fn subscriptable(attr: TokenStream, item: TokenStream) -> TokenStream {
    subscriptable::subscriptable_impl(attr, item)
}
