pub mod app;
pub mod cli;
pub mod config;
pub mod operation;
pub mod output;
mod version;

pub use app::{load_or_report, run};
pub use version::VERSION;
