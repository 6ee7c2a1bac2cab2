use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Error taxonomy for the assignment/submission domain.
///
/// Every operation validates input and ownership before touching persisted
/// state, so a returned error implies nothing was written.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed, missing, or out-of-range input. Recoverable by the caller.
    #[error("{0}")]
    Validation(String),

    /// The referenced record does not exist. Terminal for the request.
    #[error("{0}")]
    NotFound(String),

    /// The caller lacks ownership or role. Terminal, never retried.
    #[error("{0}")]
    Forbidden(String),

    /// A record for the same key already exists.
    #[error("{0}")]
    Conflict(String),

    /// Persistence failure, surfaced opaquely.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

/// Maps a unique-constraint violation to `Conflict`, anything else to
/// `Database`. Used where the schema serializes duplicate inserts.
pub fn conflict_on_unique(err: DbErr, msg: &str) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::conflict(msg),
        _ => DomainError::Database(err),
    }
}
