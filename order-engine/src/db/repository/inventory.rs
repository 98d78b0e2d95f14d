//! Inventory Ledger
//!
//! Per-ingredient availability deltas. Every mutation runs on a
//! transaction-scoped connection owned by the order manager; the ledger is
//! never committed on its own.

use super::{RepoError, RepoResult};
use sqlx::SqliteConnection;

/// Result of a reservation attempt against one ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// Tracked stock decremented; holds the remaining availability.
    Reserved(i64),
    /// Unlimited ingredient — nothing to decrement.
    Untracked,
    /// Tracked but already at zero. The conditional UPDATE, not the
    /// advisory pre-check, is what keeps stock from going negative.
    Depleted,
}

/// Decrement tracked stock by one, only while it is positive.
pub async fn decrement_if_positive(
    conn: &mut SqliteConnection,
    ingredient_id: i64,
) -> RepoResult<ReserveOutcome> {
    let remaining = sqlx::query_scalar::<_, i64>(
        "UPDATE ingredient SET availability = availability - 1 \
         WHERE id = ? AND availability IS NOT NULL AND availability > 0 \
         RETURNING availability",
    )
    .bind(ingredient_id)
    .fetch_optional(&mut *conn)
    .await?;

    match remaining {
        Some(n) => Ok(ReserveOutcome::Reserved(n)),
        None => match availability_of(conn, ingredient_id).await? {
            None => Ok(ReserveOutcome::Untracked),
            Some(_) => Ok(ReserveOutcome::Depleted),
        },
    }
}

/// Increment tracked stock by one; no-op for unlimited ingredients.
///
/// Returns the new availability, or `None` when untracked. There is no
/// ceiling: releasing more than was ever reserved pushes availability past
/// the originally provisioned stock.
pub async fn increment_if_tracked(
    conn: &mut SqliteConnection,
    ingredient_id: i64,
) -> RepoResult<Option<i64>> {
    let restored = sqlx::query_scalar::<_, i64>(
        "UPDATE ingredient SET availability = availability + 1 \
         WHERE id = ? AND availability IS NOT NULL \
         RETURNING availability",
    )
    .bind(ingredient_id)
    .fetch_optional(&mut *conn)
    .await?;

    if restored.is_none() {
        // Distinguish untracked from a missing row
        availability_of(conn, ingredient_id).await?;
    }
    Ok(restored)
}

/// Current availability; `None` means unlimited.
pub async fn availability_of(
    conn: &mut SqliteConnection,
    ingredient_id: i64,
) -> RepoResult<Option<i64>> {
    let row = sqlx::query_scalar::<_, Option<i64>>("SELECT availability FROM ingredient WHERE id = ?")
        .bind(ingredient_id)
        .fetch_optional(&mut *conn)
        .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("Ingredient {ingredient_id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::catalog;
    use shared::models::IngredientCreate;
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        DbService::open_in_memory().await.unwrap().pool
    }

    async fn ing(pool: &SqlitePool, name: &str, availability: Option<i64>) -> i64 {
        catalog::create_ingredient(
            pool,
            IngredientCreate {
                name: name.into(),
                price: 1.0,
                availability,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_decrement_tracked() {
        let pool = test_pool().await;
        let ham = ing(&pool, "Ham", Some(2)).await;
        let mut conn = pool.acquire().await.unwrap();

        assert_eq!(
            decrement_if_positive(&mut conn, ham).await.unwrap(),
            ReserveOutcome::Reserved(1)
        );
        assert_eq!(
            decrement_if_positive(&mut conn, ham).await.unwrap(),
            ReserveOutcome::Reserved(0)
        );
        // At zero the guard refuses; stock never goes negative
        assert_eq!(
            decrement_if_positive(&mut conn, ham).await.unwrap(),
            ReserveOutcome::Depleted
        );
        assert_eq!(availability_of(&mut conn, ham).await.unwrap(), Some(0));
    }

    #[tokio::test]
    async fn test_decrement_untracked_is_noop() {
        let pool = test_pool().await;
        let tomatoes = ing(&pool, "Tomatoes", None).await;
        let mut conn = pool.acquire().await.unwrap();

        assert_eq!(
            decrement_if_positive(&mut conn, tomatoes).await.unwrap(),
            ReserveOutcome::Untracked
        );
        assert_eq!(availability_of(&mut conn, tomatoes).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_increment_tracked_and_untracked() {
        let pool = test_pool().await;
        let ham = ing(&pool, "Ham", Some(1)).await;
        let tomatoes = ing(&pool, "Tomatoes", None).await;
        let mut conn = pool.acquire().await.unwrap();

        assert_eq!(increment_if_tracked(&mut conn, ham).await.unwrap(), Some(2));
        assert_eq!(
            increment_if_tracked(&mut conn, tomatoes).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_increment_has_no_ceiling() {
        // Releases are not bounded by the originally provisioned stock
        let pool = test_pool().await;
        let ham = ing(&pool, "Ham", Some(1)).await;
        let mut conn = pool.acquire().await.unwrap();

        assert_eq!(increment_if_tracked(&mut conn, ham).await.unwrap(), Some(2));
        assert_eq!(increment_if_tracked(&mut conn, ham).await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_unknown_ingredient_is_not_found() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        assert!(matches!(
            decrement_if_positive(&mut conn, 999).await.unwrap_err(),
            RepoError::NotFound(_)
        ));
        assert!(matches!(
            increment_if_tracked(&mut conn, 999).await.unwrap_err(),
            RepoError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_ledger_rolls_back_with_its_transaction() {
        let pool = test_pool().await;
        let ham = ing(&pool, "Ham", Some(2)).await;

        {
            let mut tx = pool.begin().await.unwrap();
            assert_eq!(
                decrement_if_positive(&mut tx, ham).await.unwrap(),
                ReserveOutcome::Reserved(1)
            );
            // Dropped without commit
        }

        let mut conn = pool.acquire().await.unwrap();
        assert_eq!(availability_of(&mut conn, ham).await.unwrap(), Some(2));
    }
}
