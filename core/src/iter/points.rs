use std::iter::FusedIterator;

use num_bigint::BigUint;

use crate::address::Address;
use crate::range::IpRange;
use crate::ranges::IpRanges;

use super::steps;

/// Yields every address of a range set in ascending order.
#[derive(Debug, Clone)]
pub struct PointIter {
    ranges: Vec<IpRange>,
    index: usize,
    current: Option<Address>,
}

impl PointIter {
    pub(crate) fn new(ranges: &IpRanges) -> Self {
        Self {
            ranges: ranges.merge().ranges().to_vec(),
            index: 0,
            current: None,
        }
    }

    /// Moves `n` addresses forward and returns the address landed on.
    ///
    /// Whole ranges are skipped with integer arithmetic, so the cost grows
    /// with the number of ranges crossed, not with `n`.
    pub fn next_n(&mut self, n: impl Into<BigUint>) -> Option<Address> {
        let mut skip = steps(n.into()) - 1u32;
        let mut resume = self.current.map(|current| current.to_biguint() + 1u32);

        while let Some(range) = self.ranges.get(self.index) {
            let first = resume.take().unwrap_or_else(|| range.start().to_biguint());
            let last = range.end().to_biguint();

            if first <= last {
                let available = &last - &first;
                if skip <= available {
                    let next = Address::from_biguint(&(first + skip), range.family());
                    self.current = next;
                    return next;
                }
                skip -= available + 1u32;
            }

            self.index += 1;
        }

        None
    }

    /// Rewinds to the first address.
    pub fn reset(&mut self) {
        self.index = 0;
        self.current = None;
    }
}

impl Iterator for PointIter {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_n(1u32)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next_n(BigUint::from(n) + 1u32)
    }
}

impl FusedIterator for PointIter {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
