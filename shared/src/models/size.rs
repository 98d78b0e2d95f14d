//! Size Model

use serde::{Deserialize, Serialize};

/// Dish size (小/中/大). `max_ingredients` caps how many ingredients one
/// order of this size may carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Size {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub max_ingredients: i64,
}

/// Create size payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeCreate {
    pub name: String,
    pub price: f64,
    pub max_ingredients: i64,
}
