//! Set difference of half-open time intervals.
//!
//! Given a base collection of intervals and a collection of intervals to
//! remove, [`subtract()`] returns the pieces of the base intervals that are
//! not covered by any interval being removed:
//!
//! ```
//! use interdiff::{subtract, TimeInterval};
//!
//! # fn main() -> Result<(), interdiff::Error> {
//! let base = [
//!     TimeInterval::from_hm(9, 0, 10, 0)?,
//!     TimeInterval::from_hm(11, 0, 12, 0)?,
//! ];
//! let to_remove = [TimeInterval::from_hm(9, 30, 11, 15)?];
//!
//! let got = subtract(base, to_remove);
//! assert_eq!(
//!     got,
//!     [
//!         TimeInterval::from_hm(9, 0, 9, 30)?,
//!         TimeInterval::from_hm(11, 15, 12, 0)?,
//!     ]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! The difference is computed by an [`IntervalTree`], an AVL tree ordered by
//! interval lower bound in which each node caches the latest upper bound in
//! its subtree. For each interval being removed, the tree is queried for the
//! overlapping intervals (pruning subtrees that end before the query starts),
//! which are removed and replaced with whatever [`Interval::subtract()`]
//! leaves of them.
//!
//! All intervals are half-open: `[start, end)`. Intervals that only touch at
//! their endpoints do not overlap.

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    clippy::todo,
    clippy::dbg_macro,
    clippy::explicit_iter_loop,
    clippy::future_not_send,
    clippy::use_self,
    clippy::clone_on_ref_ptr
)]

mod error;
mod interval;
mod iter;
mod node;
mod subtract;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use interval::*;
pub use iter::*;
pub use subtract::*;
pub use tree::*;
