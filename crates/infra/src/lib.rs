// crates/infra/src/lib.rs
pub mod persistence;
