//! Errors reported by explicit subscript lookups.
//!
//! Plain reads never fail: a missing element is `None`. These errors only come
//! out of [`Subscripted::try_get`](crate::Subscripted::try_get) and the panic
//! message of the `Index` operator.

use crate::String;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key is an integer but the delegate has no element for it.
    #[error("no element at index {index}")]
    NoElement { index: i64 },

    /// The key is not an integer, so it names an ordinary member.
    #[error("`{key}` is not an integer index")]
    NotAnIndex { key: String },
}
