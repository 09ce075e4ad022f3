//! # Address Values
//!
//! A normalized IPv4 or IPv6 address with ordering and integer arithmetic.
//!
//! IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) collapse to their 4-byte
//! form, so an [`Address`] always has a width of 32 or 128 bits. In text
//! only the dotted notation collapses: `::ffff:0:0` written in hex groups
//! stays IPv6, and IPv6 addresses inside `::ffff:0:0/96` print that way.
//! All arithmetic goes through [`BigUint`], because the span of an IPv6
//! `/0` does not fit in any native integer.

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::Error;

/// The IP version of an address, range or range set.
///
/// `Unknown` is the family of the zero value of a range set, before any
/// range committed it to one version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Family {
    #[default]
    Unknown,
    Ipv4,
    Ipv6,
}

impl Family {
    /// Width of an address of this family, in bits.
    pub fn bits(self) -> u8 {
        match self {
            Family::Unknown => 0,
            Family::Ipv4 => 32,
            Family::Ipv6 => 128,
        }
    }

    /// Width of an address of this family, in bytes.
    pub fn bytes(self) -> usize {
        usize::from(self.bits() / 8)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Unknown => "Unknown",
            Family::Ipv4 => "IPv4",
            Family::Ipv6 => "IPv6",
        };
        f.write_str(name)
    }
}

/// A normalized IP address.
///
/// The derived [`Ord`] places every IPv4 address before every IPv6 address,
/// which is only useful for sorting. Use [`Address::compare`] when the two
/// sides may belong to different families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(IpAddr);

impl Address {
    /// Builds the canonical form of `ip`.
    pub fn normalize(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => Address(IpAddr::V4(v4)),
                None => Address(IpAddr::V6(v6)),
            },
            v4 => Address(v4),
        }
    }

    /// Wraps `ip` as is, keeping its family.
    pub(crate) fn exact(ip: IpAddr) -> Self {
        Address(ip)
    }

    pub fn ip(&self) -> IpAddr {
        self.0
    }

    pub fn family(&self) -> Family {
        match self.0 {
            IpAddr::V4(_) => Family::Ipv4,
            IpAddr::V6(_) => Family::Ipv6,
        }
    }

    /// Big-endian bytes of the address, 4 or 16 long.
    pub fn octets(&self) -> Vec<u8> {
        match self.0 {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }

    /// Orders two addresses of the same family.
    ///
    /// Returns `None` when the families differ, which containment checks
    /// treat as "not contained".
    pub fn compare(&self, other: &Address) -> Option<Ordering> {
        if self.family() == other.family() {
            Some(self.cmp(other))
        } else {
            None
        }
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.octets())
    }

    /// Converts an integer back into an address of `family`.
    ///
    /// Returns `None` if `n` does not fit in the family's width or the
    /// family is [`Family::Unknown`].
    pub fn from_biguint(n: &BigUint, family: Family) -> Option<Self> {
        let width = family.bytes();
        if width == 0 {
            return None;
        }

        let digits = if n.is_zero() { Vec::new() } else { n.to_bytes_be() };
        if digits.len() > width {
            return None;
        }

        let mut octets = vec![0u8; width];
        octets[width - digits.len()..].copy_from_slice(&digits);

        let ip = match family {
            Family::Ipv4 => {
                let bytes: [u8; 4] = octets.try_into().ok()?;
                IpAddr::V4(Ipv4Addr::from(bytes))
            }
            Family::Ipv6 => {
                let bytes: [u8; 16] = octets.try_into().ok()?;
                IpAddr::V6(Ipv6Addr::from(bytes))
            }
            Family::Unknown => return None,
        };
        Some(Address(ip))
    }

    /// The address right after this one, if the family has room for it.
    pub fn increment(&self) -> Option<Self> {
        self.offset_by(&BigUint::one())
    }

    /// The address right before this one, `None` at the bottom of the family.
    pub fn decrement(&self) -> Option<Self> {
        let n = self.to_biguint();
        if n.is_zero() {
            return None;
        }
        Address::from_biguint(&(n - 1u32), self.family())
    }

    /// The address `n` positions after this one.
    pub fn offset_by(&self, n: &BigUint) -> Option<Self> {
        Address::from_biguint(&(self.to_biguint() + n), self.family())
    }

    /// Number of zero low-order bits, the full width for the zero address.
    pub fn trailing_zeros(&self) -> u32 {
        self.to_biguint()
            .trailing_zeros()
            .map_or(u32::from(self.family().bits()), |tz| tz as u32)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Address::normalize(ip)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address(IpAddr::V4(ip))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address::normalize(IpAddr::V6(ip))
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ip = s.parse::<IpAddr>().map_err(|_| Error::invalid(s))?;
        if s.contains('.') {
            Ok(Address::normalize(ip))
        } else {
            Ok(Address::exact(ip))
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            IpAddr::V6(v6) if v6.to_ipv4_mapped().is_some() => write_groups(f, v6.segments()),
            ip => fmt::Display::fmt(&ip, f),
        }
    }
}

/// Writes an IPv6 address as hex groups, compressing the longest zero run.
fn write_groups(f: &mut fmt::Formatter<'_>, segments: [u16; 8]) -> fmt::Result {
    let (mut best, mut run) = ((0, 0), (0, 0));
    for (i, segment) in segments.iter().enumerate() {
        if *segment == 0 {
            if run.1 == 0 {
                run.0 = i;
            }
            run.1 += 1;
            if run.1 > best.1 {
                best = run;
            }
        } else {
            run.1 = 0;
        }
    }

    let join = |groups: &[u16]| {
        groups
            .iter()
            .map(|group| format!("{group:x}"))
            .collect::<Vec<_>>()
            .join(":")
    };

    if best.1 < 2 {
        return f.write_str(&join(&segments));
    }
    let (head, tail) = (&segments[..best.0], &segments[best.0 + best.1..]);
    write!(f, "{}::{}", join(head), join(tail))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
