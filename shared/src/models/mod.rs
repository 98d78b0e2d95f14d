//! Data models
//!
//! Shared between the order engine and its callers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod dish;
pub mod ingredient;
pub mod order;
pub mod size;

// Re-exports
pub use dish::*;
pub use ingredient::*;
pub use order::*;
pub use size::*;
