// src/config.rs
use std::path::PathBuf;

use user_stats_domain::analytics::{DEFAULT_MIN_AGE, DEFAULT_TOP_N};

use crate::cli::Args;

/// Location of the users table, next to the crate manifest.
pub const DATA_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/users.csv");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    /// Raw operation selector; `None` means `summary`.
    pub selector: Option<String>,
    pub min_age: i64,
    pub top_n: usize,
    pub format: OutputFormat,
}

impl Config {
    /// Same settings, reading from `path` instead of the bundled table.
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            selector: None,
            min_age: DEFAULT_MIN_AGE,
            top_n: DEFAULT_TOP_N,
            format: OutputFormat::Text,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            selector: args.operation,
            min_age: args.min_age,
            top_n: args.top,
            format: args.format.into(),
            ..Self::default()
        }
    }
}
