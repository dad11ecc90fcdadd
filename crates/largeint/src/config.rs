//! Application configuration from CLI flags and environment.

use clap::Parser;

/// largeint — big-integer arithmetic over a recycling digit-node pool.
#[derive(Parser, Debug)]
#[command(name = "largeint", version, about)]
pub struct AppConfig {
    /// Two decimal values to operate on; read from stdin when omitted.
    #[arg(value_name = "VALUE", num_args = 0..=2)]
    pub values: Vec<String>,

    /// Quiet mode (only output the computed lines).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print pool hit/miss statistics after the computation.
    #[arg(long, env = "LARGEINT_STATS")]
    pub stats: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
