// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum UserStatsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<UserStatsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, UserStatsError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An `age` field that is not an integer. Never coerced to a default.
    #[error("invalid age {value:?} for user '{name}'")]
    InvalidAge {
        name: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// The only load failure the application recovers from.
    #[error("Could not find CSV at {}", path.display())]
    CsvNotFound { path: PathBuf },

    #[error("Failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV '{}': {source}", path.display())]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl InfrastructureError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::CsvNotFound { .. })
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Unknown operation '{selector}'. Use summary|filter|group|avg|top|region.")]
    UnknownOperation { selector: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for UserStatsError {
    fn from(err: std::io::Error) -> Self {
        PresentationError::from(err).into()
    }
}

impl From<serde_json::Error> for UserStatsError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<UserStatsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| UserStatsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| UserStatsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
