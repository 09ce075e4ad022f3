#![cfg(test)]
use iprange_core::{Address, IpRange, IpRanges};
use num_bigint::BigUint;
use num_traits::Zero;
use proptest::prelude::*;

use crate::support::{any_ranges, network_to_range, same_family_pair};

proptest! {
    #[test]
    fn rendering_round_trips(ranges in any_ranges()) {
        for range in ranges.ranges() {
            let reparsed: IpRange = range.to_string().parse().unwrap();
            prop_assert_eq!(&reparsed, range);
        }

        let reparsed: IpRanges = ranges.strings().join(",").parse().unwrap();
        prop_assert_eq!(reparsed, ranges);
    }

    #[test]
    fn merge_is_idempotent(ranges in any_ranges()) {
        let merged = ranges.merge();
        prop_assert_eq!(merged.merge(), merged.clone());
        prop_assert!(!merged.is_overlap());
        prop_assert!(ranges.merge_eq(&merged));
    }

    #[test]
    fn merged_ranges_are_sorted_and_apart(ranges in any_ranges()) {
        let merged = ranges.merge();
        for pair in merged.ranges().windows(2) {
            let gap_start = pair[0].end().increment().unwrap();
            prop_assert!(gap_start < pair[1].start());
        }
    }

    #[test]
    fn inclusion_exclusion((a, b) in same_family_pair()) {
        let union = a.union(&b);
        let intersection = a.intersect(&b);
        prop_assert_eq!(union.size() + intersection.size(), a.size() + b.size());
    }

    #[test]
    fn union_covers_difference((a, b) in same_family_pair()) {
        let difference = a.diff(&b);
        let union = a.union(&difference);
        prop_assert!(difference.diff(&union).is_empty());
        prop_assert!(a.diff(&a.union(&b)).is_empty());
    }

    #[test]
    fn difference_leaves_nothing_of_subtrahend((a, b) in same_family_pair()) {
        let difference = a.diff(&b);
        prop_assert!(difference.intersect(&b).is_empty());
        prop_assert_eq!(difference.size() + a.intersect(&b).size(), a.size());
    }

    #[test]
    fn operands_survive_algebra((a, b) in same_family_pair()) {
        let (before_a, before_b) = (a.clone(), b.clone());
        let _ = a.union(&b);
        let _ = a.diff(&b);
        let _ = a.intersect(&b);
        let _ = a.is_overlap();
        prop_assert_eq!(a, before_a);
        prop_assert_eq!(b, before_b);
    }

    #[test]
    fn cidr_blocks_tile_the_set(ranges in any_ranges()) {
        let blocks: Vec<IpRange> = ranges.cidrs().map(network_to_range).collect();

        let total: BigUint = blocks.iter().map(IpRange::size).sum();
        prop_assert_eq!(total, ranges.size());

        for pair in blocks.windows(2) {
            prop_assert!(pair[0].end() < pair[1].start());
        }

        let rebuilt = IpRanges::parse(blocks.iter().map(IpRange::to_string)).unwrap();
        prop_assert!(rebuilt.merge_eq(&ranges));
    }

    #[test]
    fn point_iterator_visits_every_address(ranges in any_ranges()) {
        let merged = ranges.merge();
        let points: Vec<Address> = ranges.points().collect();

        prop_assert_eq!(BigUint::from(points.len()), ranges.size());
        for pair in points.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for range in merged.ranges() {
            prop_assert!(points.contains(&range.start()));
            prop_assert!(points.contains(&range.end()));
        }
        prop_assert!(points.iter().all(|addr| ranges.contains(addr)));
    }

    #[test]
    fn next_n_matches_stepping(ranges in any_ranges(), step in 1usize..700) {
        let mut fast = ranges.points();
        let mut slow = ranges.points();
        loop {
            let jumped = fast.next_n(BigUint::from(step));
            let walked = (0..step).map(|_| slow.next()).last().flatten();
            prop_assert_eq!(jumped, walked);
            if jumped.is_none() {
                break;
            }
        }
    }

    #[test]
    fn blocks_partition_the_set(ranges in any_ranges(), size in 1u32..1500) {
        let blocks: Vec<IpRanges> = ranges.blocks(size).collect();
        let block_size = BigUint::from(size);

        let (last, full) = blocks.split_last().unwrap();
        prop_assert!(full.iter().all(|block| block.size() == block_size));
        prop_assert!(!last.size().is_zero() && last.size() <= block_size);

        let joined = blocks.iter().fold(IpRanges::default(), |acc, block| {
            if acc.is_empty() { block.clone() } else { acc.union(block) }
        });
        prop_assert!(joined.merge_eq(&ranges));
    }

    #[test]
    fn full_slice_is_the_merged_set(ranges in any_ranges()) {
        prop_assert_eq!(ranges.slice(0, -1), ranges.merge());
        prop_assert_eq!(ranges.slice(-1, -1).size(), BigUint::from(1u32));
    }
}
