mod test_core;

use super::*;
use crate::db::DbService;
use crate::db::repository::catalog;
use shared::models::{DishCreate, IngredientCreate, SizeCreate};

async fn create_test_manager() -> (OrderManager, SqlitePool) {
    let db = DbService::open_in_memory().await.unwrap();
    (OrderManager::new(db.pool.clone()), db.pool)
}

// ========================================================================
// Fixture: pizza catalog used across the scenario tests
// ========================================================================

struct Fixture {
    pizza: i64,
    small: i64,
    medium: i64,
    mozzarella: i64,
    tomatoes: i64,
    eggs: i64,
    mushrooms: i64,
    olives: i64,
    ham: i64,
}

/// Pizza with Small (5.00, max 3) and Medium (7.00, max 5); Mozzarella
/// (1.00, stock 3) requires Tomatoes (0.50, unlimited); Eggs and Mushrooms
/// are incompatible; Ham has stock 2.
async fn pizza_fixture(pool: &SqlitePool) -> Fixture {
    let pizza = seed_dish(pool, "Pizza").await;
    let small = seed_size(pool, "Small", 5.0, 3).await;
    let medium = seed_size(pool, "Medium", 7.0, 5).await;

    let mozzarella = seed_ingredient(pool, "Mozzarella", 1.00, Some(3)).await;
    let tomatoes = seed_ingredient(pool, "Tomatoes", 0.50, None).await;
    let eggs = seed_ingredient(pool, "Eggs", 1.00, None).await;
    let mushrooms = seed_ingredient(pool, "Mushrooms", 0.80, Some(5)).await;
    let olives = seed_ingredient(pool, "Olives", 0.70, None).await;
    let ham = seed_ingredient(pool, "Ham", 1.20, Some(2)).await;

    catalog::add_dependency(pool, mozzarella, tomatoes).await.unwrap();
    catalog::add_incompatibility(pool, eggs, mushrooms).await.unwrap();

    Fixture {
        pizza,
        small,
        medium,
        mozzarella,
        tomatoes,
        eggs,
        mushrooms,
        olives,
        ham,
    }
}

async fn seed_dish(pool: &SqlitePool, name: &str) -> i64 {
    catalog::create_dish(pool, DishCreate { name: name.into() })
        .await
        .unwrap()
        .id
}

async fn seed_size(pool: &SqlitePool, name: &str, price: f64, max_ingredients: i64) -> i64 {
    catalog::create_size(
        pool,
        SizeCreate {
            name: name.into(),
            price,
            max_ingredients,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_ingredient(pool: &SqlitePool, name: &str, price: f64, availability: Option<i64>) -> i64 {
    catalog::create_ingredient(
        pool,
        IngredientCreate {
            name: name.into(),
            price,
            availability,
        },
    )
    .await
    .unwrap()
    .id
}

async fn availability(pool: &SqlitePool, ingredient_id: i64) -> Option<i64> {
    sqlx::query_scalar::<_, Option<i64>>("SELECT availability FROM ingredient WHERE id = ?")
        .bind(ingredient_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn order_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn association_count(pool: &SqlitePool, order_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM order_ingredient WHERE order_id = ?")
        .bind(order_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

fn expect_violation(result: OrderResult<OrderReceipt>) -> Violation {
    match result {
        Err(OrderError::Violation(v)) => v,
        other => panic!("expected violation, got {other:?}"),
    }
}
