// src/cli/args.rs
use clap::Parser;
use user_stats_domain::analytics::{DEFAULT_MIN_AGE, DEFAULT_TOP_N};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "user_stats",
    version = crate::VERSION,
    about = "Counts, averages, rankings and region groupings over users.csv"
)]
pub struct Args {
    /// Operation to run: summary, filter, group, avg, top or region (default: summary)
    #[arg(allow_hyphen_values = true)]
    pub operation: Option<String>,

    /// Minimum age kept by `filter` and `summary`
    #[arg(long, default_value_t = DEFAULT_MIN_AGE, allow_negative_numbers = true)]
    pub min_age: i64,

    /// Number of users listed by `top` and `summary`
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = CliOutputFormat::Text)]
    pub format: CliOutputFormat,

    /// Anything after the operation is ignored.
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}
