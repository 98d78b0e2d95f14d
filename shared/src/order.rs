//! Order boundary types
//!
//! The violation enumeration and the outcome types the engine hands back to
//! its transport-layer caller. Violations are a closed set checked in a
//! fixed precedence order; human-readable text lives only in `Display`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Constraint violations (client-correctable, never retried automatically).
///
/// The engine reports the first violation it finds, checking in this order:
/// dish, size, ingredient existence, stock, size capacity, dependencies,
/// incompatibilities.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("dish {id} does not exist")]
    UnknownDish { id: i64 },

    #[error("size {id} does not exist")]
    UnknownSize { id: i64 },

    #[error("ingredient {id} does not exist")]
    UnknownIngredient { id: i64 },

    #[error("ingredient {ingredient} is out of stock")]
    OutOfStock { ingredient: String },

    #[error("size {size} allows at most {limit} ingredients")]
    SizeLimitExceeded { size: String, limit: i64 },

    #[error("ingredient {ingredient} requires {requires}")]
    MissingDependency { ingredient: String, requires: String },

    #[error("ingredient {ingredient} is incompatible with {conflicts_with}")]
    Incompatible {
        ingredient: String,
        conflicts_with: String,
    },
}

/// Successful creation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: i64,
    pub total: f64,
}

/// Deletion outcome. `rows_affected` is 0 when the order does not exist or
/// belongs to another user — a no-op, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub rows_affected: u64,
}
