// src/main.rs
use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;
use user_stats::{cli::Args, config::Config};

fn main() -> Result<()> {
    let config = Config::from(Args::parse());
    let mut out = BufWriter::new(io::stdout().lock());
    user_stats::run(&config, &mut out)?;
    Ok(())
}
