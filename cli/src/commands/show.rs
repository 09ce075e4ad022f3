use colored::*;
use tracing::info;

use crate::commands::read_set;
use crate::config::Config;
use crate::terminal::{format, print};

pub fn show(args: &[String], cfg: &Config) -> anyhow::Result<()> {
    let ranges = read_set(args)?;
    let family = ranges.family();

    if cfg.quiet > 1 {
        print::print(&ranges.to_string());
        return Ok(());
    }

    print::header("range set", cfg.quiet);
    print::aligned_lines(&[
        ("Ranges", format::by_family(&ranges, family)),
        ("Merged", format::by_family(ranges.merge(), family)),
        ("Family", format::family(family)),
        ("Size", ranges.size().to_string().bold()),
        ("Overlap", format::yes_no(ranges.is_overlap())),
    ]);
    print::fat_separator(cfg.quiet);
    Ok(())
}

pub fn merge(args: &[String], cfg: &Config) -> anyhow::Result<()> {
    let ranges = read_set(args)?;
    let merged = ranges.merge();

    print::header("merge", cfg.quiet);
    print::print(&format::by_family(&merged, merged.family()).to_string());

    if cfg.quiet == 0 {
        info!("{} range(s) merged into {}", ranges.len(), merged.len());
    }
    Ok(())
}
