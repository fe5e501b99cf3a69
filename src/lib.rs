//! A skiplist is a way of storing elements in such a way that elements can be
//! efficiently accessed, inserted and removed, all in `O(log(n))` on average.
//!
//! Conceptually, a skiplist resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! where each node `[x]` has references to nodes further down the list,
//! allowing the algorithm to effectively skip ahead.
//!
//! This crate provides [`SkipSet`], a sorted, duplicate-preserving collection
//! built on such a structure. Its nodes live in a generational arena and are
//! linked by indices, so positions are handed out as small, copyable
//! [`Cursor`] values: using a cursor after its element is gone (or against
//! the wrong set) reports a [`CursorError`] rather than touching freed
//! memory.
//!
//! The set has an associated sorting function which **must** be well-behaved.
//! Specifically, given some ordering function `f(a, b)`, it must satisfy the
//! following properties:
//!
//! - Be well defined: `f(a, b)` should always return the same value
//! - Be anti-symmetric: `f(a, b) == Greater` iff `f(b, a) == Less` and
//!   `f(a, b) == Equal == f(b, a)`.
//! - Be transitive: If `f(a, b) == Greater` and `f(b, c) == Greater` then
//!   `f(a, c) == Greater`.
//!
//! Failure to satisfy these properties leaves the elements mis-sorted —
//! lookups may miss elements that are present — though, unlike a
//! pointer-based skiplist, it cannot cause memory unsafety here.
//!
//! # Examples
//!
//! ```
//! use skipset::SkipSet;
//!
//! let mut set = SkipSet::new();
//! set.insert(3);
//! set.insert(1);
//! set.insert(2);
//!
//! let elements: Vec<_> = set.iter().copied().collect();
//! assert_eq!(elements, vec![1, 2, 3]);
//!
//! let cursor = set.find(&2);
//! let (removed, next) = set.remove(cursor).unwrap();
//! assert_eq!(removed, 2);
//! assert_eq!(set.get(next), Ok(&3));
//! assert_eq!(set.len(), 2);
//! ```

mod arena;
mod cursor;
mod level_generator;
mod node;
mod set;

pub use crate::cursor::{Cursor, CursorError};
pub use crate::level_generator::{CoinFlip, CoinFlipError, LevelGenerator};
pub use crate::node::MAX_HEIGHT;
pub use crate::set::{IntoIter, Iter, SkipSet};
