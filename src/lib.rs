//! # ergoset
//!
//! An ergonomic adapter over the standard library's hash set.
//!
//! ## Overview
//!
//! [`ErgoSet`] wraps `std::collections::HashSet` by composition and adds a
//! small set of convenience operations on top of the usual container API:
//!
//! - **Membership with clear naming**: [`ErgoSet::contains`]
//! - **Existence queries over pointer-like elements**: [`ErgoSet::exists_by`]
//!   and [`ErgoSet::exists_field`] check whether any element, dereferenced to
//!   its target object, yields a given value through an accessor or a field
//!   projection
//! - **Shared empty instance**: [`ErgoSet::shared_empty`] returns a
//!   process-wide, lazily created, never-freed empty set
//! - **Union operator**: `left | right` produces a new set with the elements
//!   of both operands
//!
//! The underlying hashing, bucketing, and resizing are entirely delegated to
//! the wrapped container; this crate only layers naming and ergonomics on
//! top.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support (as a sequence of elements)
//! - `fxhash`: the `FxErgoSet` alias backed by `rustc-hash`
//! - `ahash`: the `AErgoSet` alias backed by `ahash`
//!
//! ## Example
//!
//! ```rust
//! use ergoset::ErgoSet;
//!
//! let mut set = ErgoSet::new();
//! set.insert(5);
//! assert!(set.contains(&5));
//!
//! let other = ErgoSet::from([5, 6]);
//! let union = &set | &other;
//! assert_eq!(union.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public surface of the crate.
///
/// # Usage
///
/// ```rust
/// use ergoset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;

mod shared;

pub use set::{ErgoSet, ErgoSetIntoIterator, ErgoSetIterator};

#[cfg(feature = "ahash")]
pub use set::AErgoSet;
#[cfg(feature = "fxhash")]
pub use set::FxErgoSet;
