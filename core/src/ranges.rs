//! # IP Range Sets
//!
//! An ordered collection of [`IpRange`]s sharing one family, plus the set
//! algebra over them.
//!
//! A set straight out of [`IpRanges::parse`] keeps the input order and may
//! hold overlapping ranges. [`IpRanges::merge`] produces the canonical form:
//! sorted by start, pairwise disjoint and never adjacent. Every algebra
//! operation merges its operands first and returns a fresh set, leaving both
//! operands untouched.
//!
//! Operations on two sets of different families are not errors. They return
//! the left operand, merged.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use tracing::{debug, trace};

use crate::address::{Address, Family};
use crate::error::{Error, Result};
use crate::iter::{BlockIter, CidrIter, PointIter};
use crate::range::IpRange;

/// A set of same-family IP ranges.
///
/// The zero value has family [`Family::Unknown`], no ranges and size 0.
/// Equality through [`PartialEq`] is order-sensitive; use
/// [`IpRanges::merge_eq`] to compare the covered addresses instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IpRanges {
    family: Family,
    ranges: Vec<IpRange>,
}

impl IpRanges {
    /// Parses every input as one range.
    ///
    /// The first range fixes the family; a later range of the other family
    /// fails with [`Error::DualStack`]. Parsing stops at the first bad input.
    /// An empty input list is an [`Error::InvalidFormat`], use
    /// [`IpRanges::default`] for the typed empty set.
    pub fn parse<I, S>(inputs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut family = Family::Unknown;
        let mut ranges = Vec::new();

        for input in inputs {
            let range: IpRange = input.as_ref().parse()?;
            if family == Family::Unknown {
                family = range.family();
            } else if range.family() != family {
                debug!(input = input.as_ref(), %family, "mixed address families");
                return Err(Error::DualStack);
            }
            ranges.push(range);
        }

        if ranges.is_empty() {
            return Err(Error::invalid("[]"));
        }

        Ok(Self { family, ranges })
    }

    fn empty(family: Family) -> Self {
        Self {
            family,
            ranges: Vec::new(),
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn ranges(&self) -> &[IpRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Reports whether any member range contains `addr`.
    pub fn contains(&self, addr: &Address) -> bool {
        if addr.family() != self.family {
            return false;
        }

        self.ranges.iter().any(|range| range.contains(addr))
    }

    /// Sorts and coalesces overlapping or adjacent ranges.
    ///
    /// `[172.18.0.20-30, 172.18.0.1-25]` becomes `[172.18.0.1-30]`.
    pub fn merge(&self) -> IpRanges {
        let mut sorted = self.ranges.clone();
        sorted.sort_by_key(|range| range.start());

        let mut merged: Vec<IpRange> = Vec::with_capacity(sorted.len());
        for next in sorted {
            match merged.last_mut() {
                Some(current) if adjoins(current, &next) => {
                    if next.end() > current.end() {
                        *current = IpRange::new(current.start(), next.end());
                    }
                }
                _ => merged.push(next),
            }
        }

        Self {
            family: self.family,
            ranges: merged,
        }
    }

    /// Total number of distinct addresses in the set.
    pub fn size(&self) -> BigUint {
        self.merge().ranges.iter().map(IpRange::size).sum()
    }

    /// Reports whether both sets cover exactly the same addresses.
    pub fn merge_eq(&self, other: &IpRanges) -> bool {
        self.family == other.family && self.merge() == other.merge()
    }

    /// Reports whether any two member ranges share an address.
    pub fn is_overlap(&self) -> bool {
        let mut sorted = self.ranges.clone();
        sorted.sort_by_key(|range| range.start());

        sorted.windows(2).any(|pair| pair[0].end() >= pair[1].start())
    }

    /// Union of two sets.
    ///
    /// `[172.18.0.20-30, 172.18.0.1-25] ∪ [172.18.0.5-25]` is `[172.18.0.1-30]`.
    pub fn union(&self, other: &IpRanges) -> IpRanges {
        if self.family != other.family {
            return self.merge();
        }

        let joined = Self {
            family: self.family,
            ranges: [self.ranges.as_slice(), other.ranges.as_slice()].concat(),
        };
        let merged = joined.merge();
        trace!(ranges = merged.len(), "union");
        merged
    }

    /// Addresses of `self` that are not in `other`.
    ///
    /// `[172.18.0.20-30, 172.18.0.1-25] - [172.18.0.5-25]` is
    /// `[172.18.0.1-4, 172.18.0.26-30]`.
    pub fn diff(&self, other: &IpRanges) -> IpRanges {
        if self.family != other.family || self.is_empty() || other.is_empty() {
            return self.merge();
        }

        let minuend = self.merge().ranges;
        let subtrahend = other.merge().ranges;
        let mut ranges = Vec::with_capacity(minuend.len() + subtrahend.len());

        // A: *------*   (minuend)
        // B: `------`   (subtrahend)
        let mut j = 0;
        for a in minuend {
            let mut start = a.start();
            let mut remains = true;

            while j < subtrahend.len() {
                let b = subtrahend[j];

                // *------*
                //           `------`
                if a.end() < b.start() {
                    break;
                }

                //           *------*
                // `------`
                if start > b.end() {
                    j += 1;
                    continue;
                }

                // *------*        *----------*
                //     `------`        `--`
                if start < b.start() {
                    if let Some(before) = b.start().decrement() {
                        ranges.push(IpRange::new(start, before));
                    }
                }

                //     *--*
                // `----------`
                if a.end() <= b.end() {
                    remains = false;
                    break;
                }

                //     *------*
                // `------`
                match b.end().increment() {
                    Some(after) => start = after,
                    None => {
                        remains = false;
                        break;
                    }
                }
                j += 1;
            }

            if remains {
                ranges.push(IpRange::new(start, a.end()));
            }
        }

        trace!(ranges = ranges.len(), "diff");
        Self {
            family: self.family,
            ranges,
        }
    }

    /// Addresses present in both sets.
    ///
    /// `[172.18.0.20-30, 172.18.0.1-25] ∩ [172.18.0.5-25]` is `[172.18.0.5-25]`.
    ///
    /// When either side is empty the left operand comes back merged, same
    /// as for a family mismatch.
    pub fn intersect(&self, other: &IpRanges) -> IpRanges {
        if self.family != other.family || self.is_empty() || other.is_empty() {
            return self.merge();
        }

        let left = self.merge().ranges;
        let right = other.merge().ranges;
        let mut ranges = Vec::with_capacity(left.len().max(right.len()));

        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            let start = left[i].start().max(right[j].start());
            let end = left[i].end().min(right[j].end());
            if start <= end {
                ranges.push(IpRange::new(start, end));
            }

            if left[i].end() < right[j].end() {
                i += 1;
            } else {
                j += 1;
            }
        }

        trace!(ranges = ranges.len(), "intersect");
        Self {
            family: self.family,
            ranges,
        }
    }

    /// Selects the addresses at offsets `start..=end` of the merged set.
    ///
    /// Negative offsets count back from the total size, so `-1` is the last
    /// address. Both offsets are clamped into the set; if `start` ends up
    /// past `end` the result is an empty set of the same family.
    pub fn slice(&self, start: impl Into<BigInt>, end: impl Into<BigInt>) -> IpRanges {
        let merged = self.merge();
        let size = BigInt::from(merged.size());
        if size.is_zero() {
            return Self::empty(self.family);
        }

        let last: BigInt = &size - 1u32;
        let resolve = |index: BigInt| -> BigUint {
            let index = if index.is_negative() { &size + index } else { index };
            index.clamp(BigInt::zero(), last.clone()).into_parts().1
        };
        let (start, end) = (resolve(start.into()), resolve(end.into()));
        if start > end {
            return Self::empty(self.family);
        }

        let mut ranges = Vec::new();
        let mut offset = BigUint::zero();
        for range in merged.ranges {
            let range_size = range.size();
            let next_offset = &offset + &range_size;
            if next_offset <= start {
                offset = next_offset;
                continue;
            }
            if offset > end {
                break;
            }

            let skip = if start > offset { &start - &offset } else { BigUint::zero() };
            let keep = (&end - &offset).min(range_size - 1u32);
            let bounds = (range.start().offset_by(&skip), range.start().offset_by(&keep));
            if let (Some(lo), Some(hi)) = bounds {
                ranges.push(IpRange::new(lo, hi));
            }
            offset = next_offset;
        }

        Self {
            family: self.family,
            ranges,
        }
    }

    /// Canonical string of every member range, in order.
    pub fn strings(&self) -> Vec<String> {
        self.ranges.iter().map(IpRange::to_string).collect()
    }

    /// Walks the merged set one address at a time.
    pub fn points(&self) -> PointIter {
        PointIter::new(self)
    }

    /// Walks the merged set in chunks of `block_size` addresses.
    ///
    /// A block size below 1 is treated as 1.
    pub fn blocks(&self, block_size: impl Into<BigInt>) -> BlockIter {
        BlockIter::new(self, block_size.into())
    }

    /// Walks the merged set as the minimal list of CIDR blocks.
    pub fn cidrs(&self) -> CidrIter {
        CidrIter::new(self)
    }
}

/// Reports whether `next`, which starts at or after `current`, overlaps or
/// directly follows it.
fn adjoins(current: &IpRange, next: &IpRange) -> bool {
    next.start() <= current.end() || current.end().increment() == Some(next.start())
}

impl From<IpRange> for IpRanges {
    fn from(range: IpRange) -> Self {
        Self {
            family: range.family(),
            ranges: vec![range],
        }
    }
}

impl FromStr for IpRanges {
    type Err = Error;

    /// Parses a comma or whitespace separated list, e.g.
    /// "172.18.0.1, 172.18.0.0/24".
    fn from_str(s: &str) -> Result<Self> {
        IpRanges::parse(
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty()),
        )
    }
}

impl fmt::Display for IpRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.strings().join(" "))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
