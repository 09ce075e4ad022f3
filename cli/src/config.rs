/// Output settings shared by every subcommand.
pub struct Config {
    /// 1 drops headers and summaries, 2 prints bare results only.
    pub quiet: u8,
    /// Enables debug logging unless `RUST_LOG` says otherwise.
    pub verbose: bool,
    /// Disables colored output.
    pub no_color: bool,
}
