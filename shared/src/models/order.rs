//! Order Model

use super::Ingredient;
use serde::{Deserialize, Serialize};

/// Committed order row.
///
/// `total` is snapshotted at creation (size price plus ingredient prices)
/// and never recomputed, so later catalog price changes leave history
/// intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub dish_id: i64,
    pub size_id: i64,
    pub total: f64,
    pub created_at: i64,
}

/// Order with its ingredient rows (for list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order: Order,
    pub ingredients: Vec<Ingredient>,
}
