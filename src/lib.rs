//! # Hyperion -- a very tall sequence tree
//!
//! This crate exports a single collection -- [`SeqTree`] -- which stores an ordered list of values
//! and lets you work with it by *position*. It's a B+-tree where every internal node knows how
//! many values sit under each of its children, so that "the value at index `i`" can be found in
//! O(log n) time without any keys at all.
//!
//! ### Notable features
//!
//! * Access, insertion and removal at any position in O(log n)
//! * Whole-tree [merge] and [split] in O(log n), with arbitrary differences in height
//! * [`roll`](SeqTree::roll): rotate the last `depth` values by `count` positions, in place when
//!     the rotation fits inside a single leaf holder and via split/merge otherwise
//! * Linear-time [bulk construction](SeqTree::build_from) from a `Vec`
//! * A structural [checker](SeqTree::check_invariants), for when you're suspicious
//!
//! The maximum node size is a const parameter (defaulting to [`DEFAULT_CAPACITY`]), so small
//! capacities can be used to exercise deep trees in tests.
//!
//! [merge]: SeqTree::merge
//! [split]: SeqTree::split
//!
//! ### Feature flags
//!
//! * `serde` -- implements `Serialize` and `Deserialize` for [`SeqTree`], as a plain sequence
//! * `fuzz` -- exposes the [`mock`] module and the `validate` / `dump` debugging methods, for use
//!     by the fuzzing harness
//!
//! ### Naming
//!
//! This library is named after [Hyperion], a coast redwood in California that's currently the
//! tallest known living tree.
//!
//! [Hyperion]: https://en.wikipedia.org/wiki/Hyperion_(tree)

#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod cursor;
#[cfg(any(test, feature = "fuzz"))]
pub mod mock;
#[cfg(feature = "serde")]
mod serde;
mod tree;

pub use cursor::{Cursor, PathComponent};
pub use tree::{IntoIter, InvalidKind, InvalidTree, Iter, SeqTree, DEFAULT_CAPACITY};
