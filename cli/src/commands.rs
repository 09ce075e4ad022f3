pub mod algebra;
pub mod show;
pub mod walk;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use iprange_core::IpRanges;
use num_bigint::{BigInt, BigUint};

#[derive(Parser)]
#[command(name = "iprange")]
#[command(about = "Parse, compare and walk IPv4/IPv6 ranges.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; repeat for bare results only
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse ranges and describe the resulting set
    #[command(alias = "p")]
    Show {
        #[arg(required = true)]
        ranges: Vec<String>,
    },
    /// Sort and coalesce overlapping or adjacent ranges
    #[command(alias = "m")]
    Merge {
        #[arg(required = true)]
        ranges: Vec<String>,
    },
    /// Addresses in either set
    #[command(alias = "u")]
    Union(PairArgs),
    /// Addresses of the first set that are not in the second
    #[command(alias = "d")]
    Diff(PairArgs),
    /// Addresses in both sets
    #[command(alias = "i")]
    Intersect(PairArgs),
    /// Compare two sets range by range
    #[command(alias = "e")]
    Equal {
        #[command(flatten)]
        pair: PairArgs,
        /// Merge both sides first and compare the covered addresses
        #[arg(long)]
        merged: bool,
    },
    /// Check whether an address belongs to the set
    #[command(alias = "c")]
    Contains {
        address: String,
        #[arg(required = true)]
        ranges: Vec<String>,
    },
    /// Select addresses by offset; negative offsets count from the end
    #[command(alias = "s")]
    Slice {
        #[arg(allow_negative_numbers = true)]
        start: BigInt,
        #[arg(allow_negative_numbers = true)]
        end: BigInt,
        #[arg(required = true)]
        ranges: Vec<String>,
    },
    /// List addresses one by one
    #[command(alias = "h")]
    Hosts {
        /// Addresses to skip before the first one printed
        #[arg(long, default_value = "0")]
        skip: BigUint,
        /// Stop after this many addresses
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(required = true)]
        ranges: Vec<String>,
    },
    /// List fixed-size blocks of addresses
    #[command(alias = "b")]
    Blocks {
        /// Addresses per block
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        size: BigInt,
        /// Stop after this many blocks
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(required = true)]
        ranges: Vec<String>,
    },
    /// Split the set into the fewest CIDR blocks
    Cidrs {
        #[arg(required = true)]
        ranges: Vec<String>,
    },
}

#[derive(Args)]
pub struct PairArgs {
    /// Left-hand set
    #[arg(required = true)]
    pub ranges: Vec<String>,
    /// Right-hand set
    #[arg(short, long, required = true, num_args = 1..)]
    pub with: Vec<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses command line arguments into one set.
///
/// Each argument may itself be a comma-separated list, so
/// `172.18.0.1,172.18.0.0/24` counts as two ranges.
pub fn read_set(args: &[String]) -> anyhow::Result<IpRanges> {
    let parts: Vec<&str> = args
        .iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let ranges = IpRanges::parse(&parts)
        .with_context(|| format!("Failed to parse IP ranges '{}'", args.join(" ")))?;

    tracing::debug!(family = %ranges.family(), ranges = ranges.len(), "parsed input");
    Ok(ranges)
}
