// crates/shared-kernel/src/lib.rs
pub use error::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, PresentationError,
    PresentationResult, Result, UserStatsError,
};

pub mod error;
