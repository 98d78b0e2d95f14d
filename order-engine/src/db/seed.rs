//! Demo catalog seeding
//!
//! Catalog rows are provisioned out-of-band; this loads a small demo menu
//! on first start and is a no-op once any dish exists.

use crate::db::repository::{RepoResult, catalog};
use shared::models::{DishCreate, IngredientCreate, SizeCreate};
use sqlx::SqlitePool;

pub async fn seed_demo_catalog(pool: &SqlitePool) -> RepoResult<()> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dish")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    for name in ["Pizza", "Pasta", "Salad"] {
        catalog::create_dish(pool, DishCreate { name: name.into() }).await?;
    }

    for (name, price, max_ingredients) in
        [("Small", 5.0, 3), ("Medium", 7.0, 5), ("Large", 9.0, 7)]
    {
        catalog::create_size(
            pool,
            SizeCreate {
                name: name.into(),
                price,
                max_ingredients,
            },
        )
        .await?;
    }

    let mut ids = Vec::new();
    for (name, price, availability) in [
        ("Anchovies", 1.50, Some(1)),
        ("Carrots", 0.40, None),
        ("Eggs", 1.00, None),
        ("Ham", 1.20, Some(2)),
        ("Mozzarella", 1.00, Some(3)),
        ("Mushrooms", 0.80, Some(3)),
        ("Olives", 0.70, None),
        ("Parmesan", 1.20, None),
        ("Tomatoes", 0.50, None),
        ("Tuna", 1.50, Some(2)),
    ] {
        let ingredient = catalog::create_ingredient(
            pool,
            IngredientCreate {
                name: name.into(),
                price,
                availability,
            },
        )
        .await?;
        ids.push((name, ingredient.id));
    }
    let id_of = |name: &str| {
        ids.iter()
            .find(|(n, _)| *n == name)
            .map(|(_, id)| *id)
            .unwrap_or_default()
    };

    // Dependencies: picking the first requires picking the second
    catalog::add_dependency(pool, id_of("Mozzarella"), id_of("Tomatoes")).await?;
    catalog::add_dependency(pool, id_of("Parmesan"), id_of("Mozzarella")).await?;
    catalog::add_dependency(pool, id_of("Tuna"), id_of("Olives")).await?;

    // Incompatibilities (one row per pair, symmetric at lookup)
    catalog::add_incompatibility(pool, id_of("Eggs"), id_of("Mushrooms")).await?;
    catalog::add_incompatibility(pool, id_of("Ham"), id_of("Mushrooms")).await?;
    catalog::add_incompatibility(pool, id_of("Olives"), id_of("Anchovies")).await?;

    tracing::info!("Demo catalog seeded");
    Ok(())
}
