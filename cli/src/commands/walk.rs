use iprange_core::{Family, IpRange};
use num_bigint::{BigInt, BigUint};
use tracing::info;

use crate::commands::read_set;
use crate::config::Config;
use crate::terminal::{format, print};

pub fn hosts(
    skip: &BigUint,
    limit: Option<usize>,
    args: &[String],
    cfg: &Config,
) -> anyhow::Result<()> {
    let ranges = read_set(args)?;
    let family = ranges.family();
    let mut iter = ranges.points();

    print::header("hosts", cfg.quiet);

    let mut next = iter.next_n(skip + 1u32);
    let mut count: usize = 0;
    while let Some(addr) = next {
        if limit.is_some_and(|limit| count >= limit) {
            break;
        }
        print::indexed(count, &format::by_family(addr, family), cfg.quiet);
        count += 1;
        next = iter.next();
    }

    summary(count, "address(es)", family, cfg);
    Ok(())
}

pub fn blocks(
    size: &BigInt,
    limit: Option<usize>,
    args: &[String],
    cfg: &Config,
) -> anyhow::Result<()> {
    let ranges = read_set(args)?;
    let family = ranges.family();
    let iter = ranges.blocks(size.clone());

    print::header(&format!("blocks of {}", iter.block_size()), cfg.quiet);

    let mut count: usize = 0;
    for block in iter.take(limit.unwrap_or(usize::MAX)) {
        print::indexed(count, &format::by_family(&block, family), cfg.quiet);
        count += 1;
    }

    summary(count, "block(s)", family, cfg);
    Ok(())
}

pub fn cidrs(args: &[String], cfg: &Config) -> anyhow::Result<()> {
    let ranges = read_set(args)?;
    let family = ranges.family();

    print::header("cidr blocks", cfg.quiet);

    let mut count: usize = 0;
    for network in ranges.cidrs() {
        let block = format!("{}/{}", IpRange::from_network(network).start(), network.prefix());
        print::indexed(count, &format::by_family(block, family), cfg.quiet);
        count += 1;
    }

    summary(count, "CIDR block(s)", family, cfg);
    Ok(())
}

fn summary(count: usize, unit: &str, family: Family, cfg: &Config) {
    if count == 0 {
        print::no_results(cfg.quiet);
    }
    if cfg.quiet == 0 {
        info!("{count} {family} {unit} listed");
    }
}
