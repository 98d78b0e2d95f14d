//! Shared types for the order-configuration backend
//!
//! Domain models, order boundary types and small utilities used by the
//! engine crate and by transport-layer callers:
//!
//! - **models**: catalog and order row types (`db` feature adds `sqlx::FromRow`)
//! - **order**: violation enumeration and operation outcomes
//! - **util**: millisecond timestamps and snowflake-style i64 IDs

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
