use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::One;
use pnet::ipnetwork::IpNetwork;

use crate::address::Address;
use crate::range::IpRange;
use crate::ranges::IpRanges;

/// Splits each range of a set into the fewest aligned CIDR blocks.
///
/// At every step the block is the largest one that both starts on its own
/// boundary and still fits in what is left of the range.
#[derive(Debug, Clone)]
pub struct CidrIter {
    ranges: Vec<IpRange>,
    index: usize,
    cursor: Option<BigUint>,
}

impl CidrIter {
    pub(crate) fn new(ranges: &IpRanges) -> Self {
        Self {
            ranges: ranges.merge().ranges().to_vec(),
            index: 0,
            cursor: None,
        }
    }

    /// Rewinds to the first block of the first range.
    pub fn reset(&mut self) {
        self.index = 0;
        self.cursor = None;
    }
}

impl Iterator for CidrIter {
    type Item = IpNetwork;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(range) = self.ranges.get(self.index) {
            let current = self.cursor.take().unwrap_or_else(|| range.start().to_biguint());
            let last = range.end().to_biguint();
            if current > last {
                self.index += 1;
                continue;
            }

            let width = u32::from(range.family().bits());
            let aligned = current.trailing_zeros().map_or(width, |tz| tz as u32);
            let fits = (((&last - &current) + 1u32).bits() - 1) as u32;
            let host_bits = aligned.min(fits);

            let network = Address::from_biguint(&current, range.family())
                .and_then(|addr| IpNetwork::new(addr.ip(), (width - host_bits) as u8).ok())?;

            self.cursor = Some(current + (BigUint::one() << host_bits));
            return Some(network);
        }

        None
    }
}

impl FusedIterator for CidrIter {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn cidrs(inputs: &[&str]) -> Vec<String> {
        IpRanges::parse(inputs)
            .unwrap()
            .cidrs()
            .map(|network| network.to_string())
            .collect()
    }

    #[test]
    fn test_small_unaligned_range() {
        assert_eq!(cidrs(&["172.18.0.1-3"]), vec!["172.18.0.1/32", "172.18.0.2/31"]);
    }

    #[test]
    fn test_aligned_block_is_one_network() {
        assert_eq!(cidrs(&["172.18.0.0/24"]), vec!["172.18.0.0/24"]);
        assert_eq!(cidrs(&["0.0.0.0/0"]), vec!["0.0.0.0/0"]);
        assert_eq!(cidrs(&["::/0"]), vec!["::/0"]);
        assert_eq!(cidrs(&["fd00::1"]), vec!["fd00::1/128"]);
    }

    #[test]
    fn test_mixed_alignment() {
        assert_eq!(
            cidrs(&["172.18.0.1-172.18.1.10"]),
            vec![
                "172.18.0.1/32",
                "172.18.0.2/31",
                "172.18.0.4/30",
                "172.18.0.8/29",
                "172.18.0.16/28",
                "172.18.0.32/27",
                "172.18.0.64/26",
                "172.18.0.128/25",
                "172.18.1.0/29",
                "172.18.1.8/31",
                "172.18.1.10/32",
            ]
        );
    }

    #[test]
    fn test_multiple_ranges_are_merged_first() {
        assert_eq!(
            cidrs(&["fd00::8-f", "fd00::1", "fd00::2-7"]),
            vec!["fd00::1/128", "fd00::2/127", "fd00::4/126", "fd00::8/125"]
        );
    }

    #[test]
    fn test_top_of_family() {
        assert_eq!(
            cidrs(&["255.255.255.253-255"]),
            vec!["255.255.255.253/32", "255.255.255.254/31"]
        );
    }

    #[test]
    fn test_zero_value_and_reset() {
        assert_eq!(IpRanges::default().cidrs().next(), None);

        let ranges = IpRanges::parse(["172.18.0.1-3"]).unwrap();
        let mut iter = ranges.cidrs();
        assert_eq!(iter.by_ref().count(), 2);
        iter.reset();
        assert_eq!(iter.next().map(|n| n.to_string()), Some("172.18.0.1/32".to_string()));
    }
}
