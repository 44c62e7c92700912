#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Integer subscripts for arbitrary types.
//!
//! A [`Subscripted`] value owns one instance of a user type and adds integer
//! indexed reads to it. Each read is routed through a [`Delegate`]: either a
//! sequence field of the instance ([`Field`]), or the instance's own element
//! accessor ([`Accessor`], backed by the [`At`] trait). Everything else about
//! the instance stays reachable through `Deref`.
//!
//! ```
//! use subscriptable_core::{field, wrap};
//!
//! struct Samples {
//!     data: Vec<i64>,
//!     name: String,
//! }
//!
//! impl Samples {
//!     fn new(name: &str) -> Self {
//!         Samples { data: Vec::new(), name: name.to_string() }
//!     }
//! }
//!
//! let class = wrap(Samples::new, field!(Samples, data));
//! let mut samples = class.construct(("left",));
//!
//! assert_eq!(samples.get(0), None);
//! samples.data.extend([0, 1, 2]);
//! assert_eq!(samples[2], 2);
//! assert_eq!(samples.name, "left");
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::string::{String, ToString};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
pub(crate) use shim::*;

pub mod annotate;
pub mod class;
pub mod delegate;
pub mod error;
pub mod intercept;
pub mod key;
pub mod sequence;

pub use annotate::{Subscriptable, annotate};
pub use class::{Class, Constructor, wrap};
pub use delegate::{Accessor, At, Delegate, Field, Passthrough};
pub use error::Error;
pub use intercept::{Read, Subscripted, intercept};
pub use key::Key;
pub use sequence::Sequence;
