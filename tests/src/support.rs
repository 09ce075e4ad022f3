use std::net::{Ipv4Addr, Ipv6Addr};

use iprange_core::{IpRange, IpRanges};
use pnet::ipnetwork::IpNetwork;
use proptest::prelude::*;

/// Small IPv4 sets packed into a few thousand addresses, so ranges overlap
/// and touch often. The second base sits at the top of the address space.
pub fn v4_ranges() -> impl Strategy<Value = IpRanges> {
    let base = prop_oneof![Just(0x0A00_0000u32), Just(u32::MAX - 4608)];
    (base, prop::collection::vec((0u32..4096, 0u32..512), 1..6)).prop_map(|(base, spans)| {
        let inputs: Vec<String> = spans
            .into_iter()
            .map(|(offset, len)| {
                let start = Ipv4Addr::from(base + offset);
                let end = Ipv4Addr::from(base + offset + len);
                format!("{start}-{end}")
            })
            .collect();
        IpRanges::parse(&inputs).unwrap()
    })
}

/// Small IPv6 sets at the very top of the address space, or straddling
/// the start of `::ffff:0:0/96`.
pub fn v6_ranges() -> impl Strategy<Value = IpRanges> {
    let base = prop_oneof![Just(u128::MAX - (1 << 13)), Just((0xffff_u128 << 32) - 2048)];
    (base, prop::collection::vec((0u128..4096, 0u128..512), 1..6)).prop_map(|(base, spans)| {
        let inputs: Vec<String> = spans
            .into_iter()
            .map(|(offset, len)| {
                format!("{}-{}", groups(base + offset), groups(base + offset + len))
            })
            .collect();
        IpRanges::parse(&inputs).unwrap()
    })
}

/// All eight hex groups, so values inside the IPv4-mapped block stay IPv6.
fn groups(value: u128) -> String {
    Ipv6Addr::from(value).segments().map(|group| format!("{group:x}")).join(":")
}

/// Two sets of the same family.
pub fn same_family_pair() -> impl Strategy<Value = (IpRanges, IpRanges)> {
    prop_oneof![(v4_ranges(), v4_ranges()), (v6_ranges(), v6_ranges())]
}

pub fn any_ranges() -> impl Strategy<Value = IpRanges> {
    prop_oneof![v4_ranges(), v6_ranges()]
}

pub fn network_to_range(network: IpNetwork) -> IpRange {
    IpRange::from_network(network)
}

pub fn set(inputs: &[&str]) -> IpRanges {
    IpRanges::parse(inputs).unwrap()
}
