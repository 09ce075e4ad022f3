mod commands;
mod config;
mod terminal;

use commands::algebra::{self, Operation};
use commands::{CommandLine, Commands, show, walk};
use config::Config;
use tracing::{error, warn};

fn main() {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        no_color: commands.no_color,
    };
    terminal::logging::init_logging(&cfg);

    if let Err(err) = run(commands.command, &cfg) {
        explain(&err);
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands, cfg: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Show { ranges } => show::show(&ranges, cfg),
        Commands::Merge { ranges } => show::merge(&ranges, cfg),
        Commands::Union(pair) => algebra::combine(Operation::Union, &pair, cfg),
        Commands::Diff(pair) => algebra::combine(Operation::Diff, &pair, cfg),
        Commands::Intersect(pair) => algebra::combine(Operation::Intersect, &pair, cfg),
        Commands::Equal { pair, merged } => algebra::equal(&pair, merged, cfg),
        Commands::Contains { address, ranges } => algebra::contains(&address, &ranges, cfg),
        Commands::Slice { start, end, ranges } => algebra::slice(&start, &end, &ranges, cfg),
        Commands::Hosts { skip, limit, ranges } => walk::hosts(&skip, limit, &ranges, cfg),
        Commands::Blocks { size, limit, ranges } => walk::blocks(&size, limit, &ranges, cfg),
        Commands::Cidrs { ranges } => walk::cidrs(&ranges, cfg),
    }
}

/// Adds a hint for the two parse failures a user can fix themselves.
fn explain(err: &anyhow::Error) {
    let Some(cause) = err.chain().find_map(|e| e.downcast_ref::<iprange_core::Error>()) else {
        return;
    };

    if cause.is_dual_stack() {
        warn!("IPv4 and IPv6 ranges cannot be mixed in one set");
    } else if cause.is_invalid_format() {
        warn!("Accepted forms: 172.18.0.1, 172.18.0.0/24, 172.18.0.1-10, 172.18.0.1-172.18.1.10");
    }
}
