//! Unified error handling.
//!
//! Each module raises its own error type; `AppError` collects them for
//! front-ends that just need to report and carry on.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StoreError;
use crate::workflow::WorkflowError;

/// Application-level error type for the builder.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog is inconsistent.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A workflow action was refused or failed.
    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// Reading or writing a record failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Terminal or filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for refusals the user can fix, as opposed to environment failures.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Workflow(err) if !matches!(err, WorkflowError::Store(_)))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
