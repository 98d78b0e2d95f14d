//! Repository Module
//!
//! One module per store:
//!
//! - **catalog**: read-mostly reference data (dishes, sizes, ingredients,
//!   dependency and incompatibility edges) plus provisioning inserts
//! - **inventory**: per-ingredient availability ledger
//! - **order**: committed orders and their ingredient associations
//!
//! Functions taking `&mut SqliteConnection` are meant to run inside a
//! transaction owned by the order manager; functions taking `&SqlitePool`
//! are standalone reads/provisioning.

pub mod catalog;
pub mod inventory;
pub mod order;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
