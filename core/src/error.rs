//! Error types for IP range parsing.
//!
//! Set algebra never fails; only parsing can produce one of these.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The two ways turning text into ranges can go wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input matches none of the accepted notations.
    ///
    /// Also covers empty strings, out-of-range CIDR prefixes and reversed
    /// `start-end` pairs.
    #[error("invalid IP range format: {0:?}")]
    InvalidFormat(String),

    /// IPv4 and IPv6 ranges were mixed in one set.
    #[error("dual-stack IP ranges")]
    DualStack,
}

impl Error {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        Error::InvalidFormat(input.into())
    }

    /// Reports whether this is an [`Error::InvalidFormat`].
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Error::InvalidFormat(_))
    }

    /// Reports whether this is an [`Error::DualStack`].
    pub fn is_dual_stack(&self) -> bool {
        matches!(self, Error::DualStack)
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
