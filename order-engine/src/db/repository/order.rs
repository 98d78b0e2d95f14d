//! Order Repository
//!
//! Committed orders and their ingredient associations. Writes and deletes
//! run only inside the order manager's transactions; reads serve the
//! per-user listing.

use super::RepoResult;
use shared::models::{Ingredient, Order};
use sqlx::{SqliteConnection, SqlitePool};

pub async fn insert(conn: &mut SqliteConnection, order: &Order) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO orders (id, user_id, dish_id, size_id, total, created_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(order.id)
    .bind(order.user_id)
    .bind(order.dish_id)
    .bind(order.size_id)
    .bind(order.total)
    .bind(order.created_at)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn insert_order_ingredient(
    conn: &mut SqliteConnection,
    order_id: i64,
    ingredient_id: i64,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO order_ingredient (order_id, ingredient_id) VALUES (?, ?)")
        .bind(order_id)
        .bind(ingredient_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub async fn ingredient_ids(conn: &mut SqliteConnection, order_id: i64) -> RepoResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT ingredient_id FROM order_ingredient WHERE order_id = ? ORDER BY ingredient_id",
    )
    .bind(order_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(ids)
}

pub async fn delete_ingredients(conn: &mut SqliteConnection, order_id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM order_ingredient WHERE order_id = ?")
        .bind(order_id)
        .execute(&mut *conn)
        .await?;
    Ok(rows.rows_affected())
}

/// Delete scoped by both order id and owner in one statement.
pub async fn delete_scoped(
    conn: &mut SqliteConnection,
    order_id: i64,
    user_id: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM orders WHERE id = ? AND user_id = ?")
        .bind(order_id)
        .bind(user_id)
        .execute(&mut *conn)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn find_for_user(
    conn: &mut SqliteConnection,
    order_id: i64,
    user_id: i64,
) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(
        "SELECT id, user_id, dish_id, size_id, total, created_at \
         FROM orders WHERE id = ? AND user_id = ?",
    )
    .bind(order_id)
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(order)
}

pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT id, user_id, dish_id, size_id, total, created_at \
         FROM orders WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn ingredients_for_order(
    pool: &SqlitePool,
    order_id: i64,
) -> RepoResult<Vec<Ingredient>> {
    let ingredients = sqlx::query_as::<_, Ingredient>(
        "SELECT i.id, i.name, i.price, i.availability \
         FROM ingredient i \
         JOIN order_ingredient oi ON oi.ingredient_id = i.id \
         WHERE oi.order_id = ? ORDER BY i.name",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(ingredients)
}
