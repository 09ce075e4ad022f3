//! # Range Set Iterators
//!
//! Lazy traversals over a merged [`crate::ranges::IpRanges`]:
//!
//! * [`PointIter`]: one address at a time, with O(range count) skipping.
//! * [`BlockIter`]: fixed-size chunks, each returned as its own range set.
//! * [`CidrIter`]: the minimal list of CIDR blocks covering the set.
//!
//! Each iterator takes a private merged copy of the set when it is built,
//! so later changes to the source set do not reach it. None of them are
//! meant to be shared between threads without external locking.
//!
//! `next_n(n)` moves `n` steps forward and returns the element it lands on;
//! `next_n(0)` and `next_n(1)` both behave like `next()`.

mod blocks;
mod cidrs;
mod points;

pub use blocks::BlockIter;
pub use cidrs::CidrIter;
pub use points::PointIter;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Number of steps a `next_n(n)` call takes, never less than one.
fn steps(n: BigUint) -> BigUint {
    if n.is_zero() { BigUint::one() } else { n }
}
