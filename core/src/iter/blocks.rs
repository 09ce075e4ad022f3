use std::iter::FusedIterator;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

use crate::ranges::IpRanges;

use super::steps;

/// Yields consecutive chunks of `block_size` addresses as range sets.
///
/// The last block holds whatever is left and may be smaller.
#[derive(Debug, Clone)]
pub struct BlockIter {
    ranges: IpRanges,
    block_size: BigUint,
    offset: BigUint,
    total: BigUint,
}

impl BlockIter {
    pub(crate) fn new(ranges: &IpRanges, block_size: BigInt) -> Self {
        let block_size = if block_size.is_positive() {
            block_size.into_parts().1
        } else {
            BigUint::one()
        };
        let ranges = ranges.merge();
        let total = ranges.size();

        Self {
            ranges,
            block_size,
            offset: BigUint::zero(),
            total,
        }
    }

    pub fn block_size(&self) -> &BigUint {
        &self.block_size
    }

    /// Moves `n` blocks forward and returns the block landed on.
    pub fn next_n(&mut self, n: impl Into<BigUint>) -> Option<IpRanges> {
        self.offset += (steps(n.into()) - 1u32) * &self.block_size;
        if self.offset >= self.total {
            return None;
        }

        let start = BigInt::from(self.offset.clone());
        let end: BigInt = &start + BigInt::from(self.block_size.clone()) - 1u32;
        self.offset += &self.block_size;

        Some(self.ranges.slice(start, end))
    }

    /// Rewinds to the first block.
    pub fn reset(&mut self) {
        self.offset = BigUint::zero();
    }
}

impl Iterator for BlockIter {
    type Item = IpRanges;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_n(1u32)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next_n(BigUint::from(n) + 1u32)
    }
}

impl FusedIterator for BlockIter {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
