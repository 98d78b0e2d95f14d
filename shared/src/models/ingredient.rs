//! Ingredient Model

use serde::{Deserialize, Serialize};

/// Ingredient entity.
///
/// `availability` is the remaining stock: `None` means unlimited (never
/// reserved or released), `Some(n)` is a tracked count that the engine
/// keeps at `n >= 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub availability: Option<i64>,
}

impl Ingredient {
    /// Tracked ingredients carry a stock count; unlimited ones do not.
    pub fn is_tracked(&self) -> bool {
        self.availability.is_some()
    }
}

/// Create ingredient payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub name: String,
    pub price: f64,
    pub availability: Option<i64>,
}
