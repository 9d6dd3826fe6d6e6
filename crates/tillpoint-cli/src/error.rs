//! CLI error type and exit codes.
//!
//! Handlers return `anyhow::Result`; `main` classifies the final error with
//! [`CliError::from_anyhow`] to pick a message and exit code.

use tillpoint_core::paths::PathError;
use thiserror::Error;
use tillpoint_core::{CoreError, RepositoryError};
use tillpoint_db::DbError;

#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Rejected input (bad amount, blank name, negative stock, ...).
    #[error("Invalid input: {0}")]
    Invalid(String),

    /// The named record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Configuration or filesystem location error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// The payment gateway could not be reached.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl CliError {
    /// Map error to an exit code, following sysexits.h where one fits.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Invalid(_) => 65,     // EX_DATAERR
            Self::NotFound(_) => 66,    // EX_NOINPUT
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Database(_) => 74,    // EX_IOERR
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }

    /// Classify an error bubbled up from a handler.
    ///
    /// Walks the whole cause chain, so an I/O or driver failure wrapped in
    /// `.context(...)` still exits with `EX_IOERR`.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if let Some(core) = cause.downcast_ref::<CoreError>() {
                return Self::from_core(core);
            }
            if let Some(path) = cause.downcast_ref::<PathError>() {
                return Self::Config(path.to_string());
            }
            if cause.is::<DbError>() || cause.is::<std::io::Error>() {
                return Self::Database(format!("{err:#}"));
            }
        }
        Self::Core(format!("{err:#}"))
    }

    fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Repository(repo) => match repo {
                RepositoryError::NotFound(msg) => Self::NotFound(format!("Not found: {msg}")),
                RepositoryError::AlreadyExists(_)
                | RepositoryError::Conflict(_)
                | RepositoryError::Constraint(_) => Self::Invalid(repo.to_string()),
                RepositoryError::Storage(_) | RepositoryError::Serialization(_) => {
                    Self::Database(repo.to_string())
                }
            },
            CoreError::Settings(e) => Self::Config(e.to_string()),
            CoreError::Validation(msg) | CoreError::InvalidTransition(msg) => {
                Self::Invalid(msg.clone())
            }
            CoreError::ExternalService(msg) => Self::Unavailable(msg.clone()),
            CoreError::Internal(msg) => Self::Core(msg.clone()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from_core(&err)
    }
}
