//! Subscriptable - integer subscripts for arbitrary types
//!
//! # Overview
//!
//! Wrapping a value or a constructor adds integer indexed reads to the
//! instances, routed either to a sequence field of the instance or to the
//! instance's own `at` accessor. Every other member of the instance stays
//! reachable as before.
//!
//! # Quick Start
//!
//! ```
//! use subscriptable::{field, wrap};
//!
//! struct MyData {
//!     data: Vec<i64>,
//!     name: String,
//! }
//!
//! impl MyData {
//!     fn new(name: &str) -> Self {
//!         MyData { data: Vec::new(), name: name.to_string() }
//!     }
//! }
//!
//! let class = wrap(MyData::new, field!(MyData, data));
//! let mut my_data = class.construct(("test",));
//!
//! assert_eq!(my_data.get(0), None);
//! my_data.data.extend([0, 1, 2]);
//! assert_eq!(my_data[1], 1);
//! assert_eq!(my_data.name, "test");
//! ```
//!
//! # Attaching Subscripts
//!
//! Three entry points share one contract:
//!
//! 1. **`wrap`**: pair a constructor with a delegate
//! 2. **`annotate`**: capture the delegate first, apply it to constructors later
//! 3. **`#[subscriptable]`**: declare the delegate on the struct (feature `macros`)
//!
//! ```
//! # #[cfg(feature = "macros")] {
//! use subscriptable::{At, Subscriptable, subscriptable};
//!
//! #[subscriptable]
//! struct Scores(Vec<u32>);
//!
//! impl At for Scores {
//!     type Element = u32;
//!
//!     fn at(&self, index: i64) -> Option<&u32> {
//!         self.0.get(usize::try_from(index).ok()?)
//!     }
//! }
//!
//! let scores = Scores(vec![7, 9]).subscripted();
//! assert_eq!(scores[1], 9);
//! # }
//! ```

// Re-export public API from subscriptable_core
pub use subscriptable_core::{
    Accessor, At, Class, Constructor, Delegate, Error, Field, Key, Passthrough, Read, Sequence,
    Subscriptable, Subscripted, annotate, field, intercept, wrap,
};

// Re-export modules for the less common items
pub use subscriptable_core::{class, delegate, key, sequence};

#[cfg(feature = "macros")]
pub use subscriptable_macros::subscriptable;
