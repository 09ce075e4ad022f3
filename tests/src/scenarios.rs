#![cfg(test)]
use std::net::IpAddr;

use iprange_core::{Address, Error, Family, IpRange, IpRanges, parse_range, parse_ranges};
use num_bigint::BigUint;

use crate::support::set;

#[test]
fn test_single_address_inside_block_merges_away() {
    let ranges = set(&["172.18.0.1", "172.18.0.0/24"]);
    assert_eq!(ranges.merge().to_string(), "[172.18.0.0/24]");
    assert_eq!(ranges.size(), BigUint::from(256u32));
    assert!(ranges.is_overlap());
}

#[test]
fn test_abbreviated_span_bounds() {
    let range = parse_range("172.18.0.1-10").unwrap();
    assert_eq!(range.start().ip(), "172.18.0.1".parse::<IpAddr>().unwrap());
    assert_eq!(range.end().ip(), "172.18.0.10".parse::<IpAddr>().unwrap());
    assert_eq!(range.size(), BigUint::from(10u32));
}

#[test]
fn test_set_algebra_example() {
    let a = set(&["172.18.0.20-30", "172.18.0.1-25"]);
    let b = set(&["172.18.0.5-25"]);

    assert_eq!(a.union(&b).to_string(), "[172.18.0.1-172.18.0.30]");
    assert_eq!(a.diff(&b).to_string(), "[172.18.0.1-172.18.0.4 172.18.0.26-172.18.0.30]");
    assert_eq!(a.intersect(&b).to_string(), "[172.18.0.5-172.18.0.25]");

    // operands are untouched
    assert_eq!(a.strings(), vec!["172.18.0.20-172.18.0.30", "172.18.0.1-172.18.0.25"]);
}

#[test]
fn test_cidr_split_example() {
    let networks: Vec<String> = set(&["172.18.0.1-3"]).cidrs().map(|n| n.to_string()).collect();
    assert_eq!(networks, vec!["172.18.0.1/32", "172.18.0.2/31"]);
}

#[test]
fn test_dual_stack_is_rejected() {
    let err = parse_ranges(["172.18.0.1", "fd00::1"]).unwrap_err();
    assert!(matches!(err, Error::DualStack));
    assert!(err.is_dual_stack());
}

#[test]
fn test_invalid_inputs() {
    let inputs = [
        "",
        "172.18.0.1-fd00::1",
        "172.18.0.10-1",
        "300.1.1.1",
        "fd00::/129",
        "10.0.0.1-",
        "172.18.0.0/+24",
    ];
    for input in inputs {
        let err = parse_range(input).unwrap_err();
        assert!(err.is_invalid_format(), "{input:?} should be rejected");
    }
    assert!(parse_ranges(Vec::<String>::new()).unwrap_err().is_invalid_format());
}

#[test]
fn test_zero_value_set() {
    let empty = IpRanges::default();
    assert_eq!(empty.family(), Family::Unknown);
    assert_eq!(empty.size(), BigUint::from(0u32));
    assert_eq!(empty.points().next(), None);
    assert_eq!(empty.blocks(4).next(), None);
    assert_eq!(empty.cidrs().next(), None);
    assert!(empty.merge().is_empty());
}

#[test]
fn test_family_mismatch_returns_left_operand() {
    let v4 = set(&["172.18.0.5", "172.18.0.1-4"]);
    let v6 = set(&["fd00::/120"]);

    assert_eq!(v4.union(&v6).to_string(), "[172.18.0.1-172.18.0.5]");
    assert_eq!(v4.diff(&v6), v4.merge());
    assert_eq!(v6.intersect(&v4), v6.merge());
}

#[test]
fn test_mapped_addresses_count_as_ipv4() {
    let ranges = set(&["::ffff:172.18.0.1-172.18.0.3"]);
    assert_eq!(ranges.family(), Family::Ipv4);
    assert!(ranges.merge_eq(&set(&["172.18.0.1-3"])));
}

#[test]
fn test_slice_then_walk() {
    let ranges = set(&["10.0.0.0/30", "10.0.1.0/30"]);
    let middle = ranges.slice(2, -3);
    assert_eq!(middle.to_string(), "[10.0.0.2/31 10.0.1.0/31]");

    let hosts: Vec<Address> = middle.points().collect();
    assert_eq!(hosts.len(), 4);
    assert_eq!(hosts[3], "10.0.1.1".parse().unwrap());
}

#[test]
fn test_blocks_then_cidrs() {
    let ranges = set(&["fd00::/126", "fd00::10-13"]);
    let blocks: Vec<IpRanges> = ranges.blocks(3).collect();
    assert_eq!(blocks.len(), 3);

    let networks: Vec<String> = blocks[1].cidrs().map(|n| n.to_string()).collect();
    assert_eq!(networks, vec!["fd00::3/128", "fd00::10/127"]);
}

#[test]
fn test_whole_ipv6_space() {
    let everything = set(&["::/0"]);
    assert_eq!(everything.size(), BigUint::from(1u8) << 128u32);

    let last = everything.slice(-1, -1);
    assert_eq!(last.to_string(), "[ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff]");

    let rest = everything.diff(&last);
    let networks: Vec<String> = rest.cidrs().map(|n| n.to_string()).collect();
    assert_eq!(networks.len(), 128);
    assert_eq!(networks[0], "::/1");
}

#[test]
fn test_from_str_accepts_separated_list() {
    let ranges: IpRanges = "172.18.0.1, 172.18.0.2-4\t172.18.0.9".parse().unwrap();
    assert_eq!(ranges.len(), 3);
    assert_eq!(ranges.merge().to_string(), "[172.18.0.1-172.18.0.4 172.18.0.9]");

    let single: IpRange = "fd00::1".parse().unwrap();
    assert!(single.is_single());
}
