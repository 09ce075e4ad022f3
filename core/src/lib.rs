//! # iprange core
//!
//! Models sets of IPv4 or IPv6 addresses as ordered lists of closed
//! intervals, without ever materializing the individual addresses.
//!
//! ## Layers
//! * **[`address`]**: the normalized [`Address`] value and its [`Family`].
//! * **[`range`]**: one contiguous [`IpRange`] and the text notations it parses.
//! * **[`ranges`]**: the [`IpRanges`] set with merge, union, diff, intersect
//!   and slicing.
//! * **[`iter`]**: lazy per-address, per-block and per-CIDR traversal.
//!
//! Data flows one way: text → [`IpRange`] → [`IpRanges`] → iterator.
//!
//! ```
//! use iprange_core::IpRanges;
//!
//! let ranges = IpRanges::parse(["172.18.0.20-30", "172.18.0.1-25"]).unwrap();
//! let holes = IpRanges::parse(["172.18.0.5-25"]).unwrap();
//!
//! assert_eq!(
//!     ranges.diff(&holes).to_string(),
//!     "[172.18.0.1-172.18.0.4 172.18.0.26-172.18.0.30]"
//! );
//! ```

pub mod address;
pub mod error;
pub mod iter;
pub mod range;
pub mod ranges;

pub use address::{Address, Family};
pub use error::{Error, Result};
pub use range::IpRange;
pub use ranges::IpRanges;

/// Parses one range notation, see [`range`] for the accepted forms.
pub fn parse_range(s: &str) -> Result<IpRange> {
    s.parse()
}

/// Parses several range notations into one set, see [`IpRanges::parse`].
pub fn parse_ranges<I, S>(inputs: I) -> Result<IpRanges>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    IpRanges::parse(inputs)
}
