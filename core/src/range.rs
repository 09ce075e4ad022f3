//! # IP Range Model
//!
//! A single closed interval `[start, end]` of addresses from one family.
//!
//! Accepted notations, tried in this order:
//! * **CIDR**: `172.18.0.0/24`, `fd00::/64`.
//! * **Range**: `172.18.0.1-172.18.1.10`, `fd00::1-fd00::1:a`.
//! * **Abbreviated range**: `172.18.0.1-10`, `fd00::1-a`. The suffix replaces
//!   everything after the last `.` (IPv4) or `:` (IPv6) of the start address.
//! * **Host**: `172.18.0.1`, `fd00::1`.

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv6Addr};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use pnet::ipnetwork::IpNetwork;
use tracing::trace;

use crate::address::{Address, Family};
use crate::error::{Error, Result};

/// Represents a continuous range of addresses, inclusive on both ends.
///
/// Both bounds share one family and `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpRange {
    start: Address,
    end: Address,
}

impl IpRange {
    /// Callers guarantee the invariants; the algebra only builds ranges
    /// from bounds it already ordered.
    pub(crate) fn new(start: Address, end: Address) -> Self {
        debug_assert_eq!(start.family(), end.family());
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// A range holding exactly one address.
    pub fn single(addr: Address) -> Self {
        Self::new(addr, addr)
    }

    /// Builds a range from two bounds, rejecting mixed families and
    /// reversed pairs.
    pub fn from_bounds(start: Address, end: Address) -> Result<Self> {
        match start.compare(&end) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self::new(start, end)),
            _ => Err(Error::invalid(format!("{start}-{end}"))),
        }
    }

    /// Creates a range from an IP and a CIDR prefix (e.g., 172.18.0.0/24).
    ///
    /// Host bits of `ip` are cleared, so `172.18.0.7/24` covers the same
    /// block as `172.18.0.0/24`. An IPv4-mapped `ip` with a prefix of 96 or
    /// more names the IPv4 block, `::ffff:172.18.0.0/120` is
    /// `172.18.0.0/24`.
    pub fn from_cidr(ip: IpAddr, prefix: u8) -> Result<Self> {
        let network = match Address::normalize(ip).ip() {
            v4 @ IpAddr::V4(_) if ip.is_ipv6() && prefix >= 96 => {
                IpNetwork::new(v4, prefix - 96)
            }
            _ => IpNetwork::new(ip, prefix),
        };

        network
            .map(Self::from_network)
            .map_err(|_| Error::invalid(format!("{ip}/{prefix}")))
    }

    /// The addresses of `network`, kept in the network's own family.
    pub fn from_network(network: IpNetwork) -> Self {
        let (first, last) = match network {
            IpNetwork::V4(net) => (IpAddr::V4(net.network()), IpAddr::V4(net.broadcast())),
            IpNetwork::V6(net) => {
                let first = u128::from(net.network());
                let last = first | !u128::from(net.mask());
                (IpAddr::V6(Ipv6Addr::from(first)), IpAddr::V6(Ipv6Addr::from(last)))
            }
        };

        Self::new(Address::exact(first), Address::exact(last))
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn family(&self) -> Family {
        self.start.family()
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Reports whether `addr` lies inside the range.
    ///
    /// An address of the other family is never contained.
    pub fn contains(&self, addr: &Address) -> bool {
        match (self.start.compare(addr), self.end.compare(addr)) {
            (Some(lower), Some(upper)) => lower != Ordering::Greater && upper != Ordering::Less,
            _ => false,
        }
    }

    /// Number of addresses in the range. An IPv6 `/0` holds 2^128.
    pub fn size(&self) -> BigUint {
        self.end.to_biguint() - self.start.to_biguint() + 1u32
    }

    /// The CIDR block equal to this range, if there is one.
    ///
    /// That is the case when the size is a power of two and `start` sits on
    /// a boundary of that size.
    pub fn to_network(&self) -> Option<IpNetwork> {
        let size = self.size();
        let span = &size - 1u32;
        if !(&size & &span).is_zero() {
            return None;
        }

        let host_bits = u32::try_from(span.bits()).ok()?;
        if self.start.trailing_zeros() < host_bits {
            return None;
        }

        let prefix = u32::from(self.family().bits()) - host_bits;
        IpNetwork::new(self.start.ip(), u8::try_from(prefix).ok()?).ok()
    }
}

impl FromStr for IpRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::invalid(s));
        }

        let parsed = if let Some((ip_str, prefix_str)) = s.split_once('/') {
            parse_cidr(ip_str, prefix_str)
        } else if let Some((start_str, end_str)) = s.split_once('-') {
            parse_span(start_str, end_str)
        } else {
            s.parse::<Address>().ok().map(IpRange::single)
        };

        parsed.ok_or_else(|| {
            trace!(input = s, "rejected IP range");
            Error::invalid(s)
        })
    }
}

/// Parses CIDR notation like "172.18.0.0/24".
///
/// Only the dotted `::ffff:a.b.c.d/p` form is read as an IPv4 block, the
/// same rule [`Address`] applies to plain addresses.
fn parse_cidr(ip_str: &str, prefix_str: &str) -> Option<IpRange> {
    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let ip = ip_str.parse::<IpAddr>().ok()?;
    let prefix = prefix_str.parse::<u8>().ok()?;
    if ip_str.contains('.') {
        IpRange::from_cidr(ip, prefix).ok()
    } else {
        IpNetwork::new(ip, prefix).ok().map(IpRange::from_network)
    }
}

/// Parses "start-end", falling back to the abbreviated end form.
fn parse_span(start_str: &str, end_str: &str) -> Option<IpRange> {
    let start = start_str.parse::<Address>().ok()?;
    let end = match end_str.parse::<Address>() {
        Ok(end) => end,
        Err(_) => expand_suffix(start_str, end_str)?,
    };

    IpRange::from_bounds(start, end).ok()
}

/// Helper to build the end address of an abbreviated range.
///
/// `("172.18.0.1", "10")` gives `172.18.0.10` and `("fd00::1", "a")`
/// gives `fd00::a`.
fn expand_suffix(start_str: &str, suffix: &str) -> Option<Address> {
    let index = start_str.rfind('.').or_else(|| start_str.rfind(':'))?;
    format!("{}{}", &start_str[..=index], suffix).parse().ok()
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            return write!(f, "{}", self.start);
        }

        match self.to_network() {
            Some(network) => write!(f, "{}/{}", self.start, network.prefix()),
            None => write!(f, "{}-{}", self.start, self.end),
        }
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
