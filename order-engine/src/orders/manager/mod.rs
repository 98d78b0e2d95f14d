//! OrderManager - transactional order creation and deletion
//!
//! # Create Flow
//!
//! ```text
//! create_order(user, dish, size, ingredients)
//!     ├─ 1. Begin transaction
//!     ├─ 2. Resolve dish and size (UnknownDish / UnknownSize)
//!     ├─ 3. Load catalog snapshot for the candidate set
//!     ├─ 4. Evaluate constraints against live data
//!     ├─ 5. Insert order row + associations
//!     ├─ 6. Reserve each tracked ingredient (conditional decrement)
//!     └─ 7. Commit — any earlier failure rolls everything back
//! ```
//!
//! # Delete Flow
//!
//! ```text
//! delete_order(user, order)
//!     ├─ 1. Begin transaction
//!     ├─ 2. Load the order scoped to its owner (missing → rows_affected 0)
//!     ├─ 3. Release each tracked ingredient
//!     ├─ 4. Delete associations, then the order row (id AND owner)
//!     └─ 5. Commit
//! ```
//!
//! An uncommitted sqlx transaction rolls back on drop, so every early
//! return leaves the store untouched.

mod error;
pub use error::{OrderError, OrderResult};

#[cfg(test)]
mod tests;

use crate::db::repository::inventory::ReserveOutcome;
use crate::db::repository::{catalog, inventory, order};
use crate::orders::{money, validation};
use shared::models::{Order, OrderDetail};
use shared::order::{DeleteOutcome, OrderReceipt, Violation};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;
use std::collections::HashSet;

/// Transactional order engine over a shared SQLite pool.
#[derive(Clone)]
pub struct OrderManager {
    pool: SqlitePool,
}

impl OrderManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Validate and commit one order, reserving tracked ingredient stock.
    ///
    /// Everything from the dish lookup to the last reservation runs in a
    /// single transaction; the serialized store is the only concurrency
    /// control.
    pub async fn create_order(
        &self,
        user_id: i64,
        dish_id: i64,
        size_id: i64,
        ingredient_ids: &[i64],
    ) -> OrderResult<OrderReceipt> {
        let candidates = dedup_preserving_order(ingredient_ids);

        let mut tx = self.pool.begin().await?;

        let dish = catalog::dish_by_id(&mut tx, dish_id)
            .await?
            .ok_or(Violation::UnknownDish { id: dish_id })?;
        let size = catalog::size_by_id(&mut tx, size_id)
            .await?
            .ok_or(Violation::UnknownSize { id: size_id })?;

        let snapshot = catalog::snapshot(&mut tx, &candidates).await?;
        validation::evaluate(&candidates, &size, &snapshot)?;

        let mut selected = Vec::with_capacity(candidates.len());
        for &id in &candidates {
            if let Some(ingredient) = snapshot.ingredient(id) {
                selected.push(ingredient);
            }
        }

        let order_row = Order {
            id: snowflake_id(),
            user_id,
            dish_id: dish.id,
            size_id: size.id,
            total: money::order_total(&size, &selected),
            created_at: now_millis(),
        };
        order::insert(&mut tx, &order_row).await?;

        for ingredient in &selected {
            order::insert_order_ingredient(&mut tx, order_row.id, ingredient.id).await?;
            match inventory::decrement_if_positive(&mut tx, ingredient.id).await? {
                ReserveOutcome::Reserved(_) | ReserveOutcome::Untracked => {}
                ReserveOutcome::Depleted => {
                    // Stock moved between the snapshot read and the reserve;
                    // dropping the transaction discards the order row and
                    // every earlier reservation
                    return Err(Violation::OutOfStock {
                        ingredient: ingredient.name.clone(),
                    }
                    .into());
                }
            }
        }

        tx.commit().await?;

        tracing::info!(
            order_id = order_row.id,
            user_id,
            dish = %dish.name,
            size = %size.name,
            total = order_row.total,
            "Order created"
        );
        Ok(OrderReceipt {
            order_id: order_row.id,
            total: order_row.total,
        })
    }

    /// Delete one order and release its reserved stock.
    ///
    /// Missing or foreign orders are a no-op reported as
    /// `rows_affected = 0`, not an error.
    pub async fn delete_order(&self, user_id: i64, order_id: i64) -> OrderResult<DeleteOutcome> {
        let mut tx = self.pool.begin().await?;

        // Owner scope on the load: a foreign or unknown order releases nothing
        if order::find_for_user(&mut tx, order_id, user_id).await?.is_none() {
            tracing::info!(order_id, user_id, "Delete ignored: order not found for user");
            return Ok(DeleteOutcome { rows_affected: 0 });
        }

        let ingredient_ids = order::ingredient_ids(&mut tx, order_id).await?;
        for &id in &ingredient_ids {
            inventory::increment_if_tracked(&mut tx, id).await?;
        }
        order::delete_ingredients(&mut tx, order_id).await?;
        let rows_affected = order::delete_scoped(&mut tx, order_id, user_id).await?;
        if rows_affected == 0 {
            // Lost a race with another delete; the dropped transaction
            // discards the releases as well
            return Ok(DeleteOutcome { rows_affected: 0 });
        }

        tx.commit().await?;

        tracing::info!(
            order_id,
            user_id,
            released = ingredient_ids.len(),
            "Order deleted"
        );
        Ok(DeleteOutcome { rows_affected })
    }

    /// Committed orders of one user, newest first, with ingredient rows.
    pub async fn orders_for_user(&self, user_id: i64) -> OrderResult<Vec<OrderDetail>> {
        let orders = order::find_by_user(&self.pool, user_id).await?;
        let mut detailed = Vec::with_capacity(orders.len());
        for order_row in orders {
            let ingredients = order::ingredients_for_order(&self.pool, order_row.id).await?;
            detailed.push(OrderDetail {
                order: order_row,
                ingredients,
            });
        }
        Ok(detailed)
    }
}

/// Collapse duplicate candidate ids, first occurrence wins.
fn dedup_preserving_order(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
