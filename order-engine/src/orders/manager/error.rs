use crate::db::repository::RepoError;
use shared::order::Violation;
use thiserror::Error;

/// Manager errors
///
/// `Violation` is client-correctable and surfaced verbatim. `Storage` is an
/// opaque persistence failure: the transaction rolled back with no partial
/// effect, so the caller may safely resubmit.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Violation(#[from] Violation),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for OrderError {
    fn from(err: sqlx::Error) -> Self {
        OrderError::Storage(err.to_string())
    }
}

impl From<RepoError> for OrderError {
    fn from(err: RepoError) -> Self {
        OrderError::Storage(err.to_string())
    }
}

/// Result type for manager operations
pub type OrderResult<T> = Result<T, OrderError>;
