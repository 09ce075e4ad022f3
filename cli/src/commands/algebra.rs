use colored::*;
use iprange_core::{Address, IpRanges};
use num_bigint::BigInt;
use tracing::{info, warn};

use crate::commands::{PairArgs, read_set};
use crate::config::Config;
use crate::terminal::{format, print};

#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Union,
    Diff,
    Intersect,
}

impl Operation {
    fn apply(self, left: &IpRanges, right: &IpRanges) -> IpRanges {
        match self {
            Operation::Union => left.union(right),
            Operation::Diff => left.diff(right),
            Operation::Intersect => left.intersect(right),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Operation::Union => "union",
            Operation::Diff => "difference",
            Operation::Intersect => "intersection",
        }
    }
}

pub fn combine(op: Operation, pair: &PairArgs, cfg: &Config) -> anyhow::Result<()> {
    let left = read_set(&pair.ranges)?;
    let right = read_set(&pair.with)?;

    if left.family() != right.family() {
        warn!(
            "Cannot combine {} with {} ranges, the left-hand set is returned as is",
            left.family(),
            right.family()
        );
    }

    let result = op.apply(&left, &right);

    print::header(op.name(), cfg.quiet);
    if result.is_empty() {
        print::no_results(cfg.quiet);
    }
    print::print(&format::by_family(&result, result.family()).to_string());

    if cfg.quiet == 0 {
        info!("{} holds {} address(es)", op.name(), result.size());
    }
    Ok(())
}

pub fn equal(pair: &PairArgs, merged: bool, cfg: &Config) -> anyhow::Result<()> {
    let left = read_set(&pair.ranges)?;
    let right = read_set(&pair.with)?;

    let same = if merged { left.merge_eq(&right) } else { left == right };

    if cfg.quiet > 1 {
        print::print(&same.to_string());
        return Ok(());
    }

    print::header("equality", cfg.quiet);
    print::aligned_lines(&[
        ("Left", format::by_family(&left, left.family())),
        ("Right", format::by_family(&right, right.family())),
        ("Mode", if merged { "merged".normal() } else { "range by range".normal() }),
        ("Equal", format::yes_no(same)),
    ]);
    Ok(())
}

pub fn contains(address: &str, args: &[String], cfg: &Config) -> anyhow::Result<()> {
    let ranges = read_set(args)?;
    let addr: Address = address.trim().parse()?;
    let found = ranges.contains(&addr);

    if cfg.quiet > 1 {
        print::print(&found.to_string());
        return Ok(());
    }

    print::header("lookup", cfg.quiet);
    print::aligned_lines(&[
        ("Address", format::by_family(addr, addr.family())),
        ("Ranges", format::by_family(&ranges, ranges.family())),
        ("Contained", format::yes_no(found)),
    ]);
    Ok(())
}

pub fn slice(start: &BigInt, end: &BigInt, args: &[String], cfg: &Config) -> anyhow::Result<()> {
    let ranges = read_set(args)?;
    let sliced = ranges.slice(start.clone(), end.clone());

    print::header("slice", cfg.quiet);
    if sliced.is_empty() {
        print::no_results(cfg.quiet);
    }
    print::print(&format::by_family(&sliced, sliced.family()).to_string());

    if cfg.quiet == 0 {
        info!(
            "Offsets {start}..={end} of {} selected {} address(es)",
            ranges.size(),
            sliced.size()
        );
    }
    Ok(())
}
