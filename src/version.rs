// src/version.rs
//! Defines the version string for the application.
//!
//! Kept in sync with `Cargo.toml` through `CARGO_PKG_VERSION`.

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
