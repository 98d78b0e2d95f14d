//! Catalog Repository
//!
//! Read-mostly reference data: dishes, sizes, ingredients and the
//! dependency / incompatibility edges between ingredients. Everything here
//! is immutable per request except `availability`, which only the
//! inventory ledger touches.

use super::{RepoError, RepoResult};
use crate::utils::validation::{MAX_NAME_LEN, require_non_negative, validate_required_text};
use shared::models::{Dish, DishCreate, Ingredient, IngredientCreate, Size, SizeCreate};
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;

pub async fn dish_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Dish>> {
    let dish = sqlx::query_as::<_, Dish>("SELECT id, name FROM dish WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(dish)
}

pub async fn size_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Size>> {
    let size = sqlx::query_as::<_, Size>(
        "SELECT id, name, price, max_ingredients FROM size WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(size)
}

pub async fn ingredients_by_ids(
    conn: &mut SqliteConnection,
    ids: &[i64],
) -> RepoResult<Vec<Ingredient>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "SELECT id, name, price, availability FROM ingredient WHERE id IN ({placeholders})"
    );
    let mut query = sqlx::query_as::<_, Ingredient>(&sql);
    for &id in ids {
        query = query.bind(id);
    }
    Ok(query.fetch_all(&mut *conn).await?)
}

/// Ingredient ids the given ingredient depends on (direct edges).
pub async fn dependencies_of(
    conn: &mut SqliteConnection,
    ingredient_id: i64,
) -> RepoResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT depends_on_id FROM ingredient_dependency \
         WHERE ingredient_id = ? ORDER BY depends_on_id",
    )
    .bind(ingredient_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(ids)
}

/// Ingredient ids incompatible with the given ingredient.
///
/// Edges are stored one row per unordered pair; both orientations are
/// checked so the relation behaves undirected.
pub async fn incompatibilities_of(
    conn: &mut SqliteConnection,
    ingredient_id: i64,
) -> RepoResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT CASE WHEN ingredient_a = ?1 THEN ingredient_b ELSE ingredient_a END \
         FROM ingredient_incompatibility \
         WHERE ingredient_a = ?1 OR ingredient_b = ?1 \
         ORDER BY 1",
    )
    .bind(ingredient_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(ids)
}

// =============================================================================
// Catalog snapshot (per-request view for the constraint evaluator)
// =============================================================================

/// Catalog view loaded once per order request: candidate ingredient rows,
/// their edges, and the rows of dependency targets outside the candidate
/// set (only their names are needed, for violation messages).
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    ingredients: HashMap<i64, Ingredient>,
    dependencies: HashMap<i64, Vec<i64>>,
    incompatibilities: HashMap<i64, Vec<i64>>,
}

impl CatalogSnapshot {
    pub fn ingredient(&self, id: i64) -> Option<&Ingredient> {
        self.ingredients.get(&id)
    }

    pub fn dependencies_of(&self, id: i64) -> &[i64] {
        self.dependencies.get(&id).map_or(&[], Vec::as_slice)
    }

    pub fn incompatibilities_of(&self, id: i64) -> &[i64] {
        self.incompatibilities.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Name for violation messages; falls back to the raw id if the row was
    /// not loaded.
    pub fn ingredient_name(&self, id: i64) -> String {
        self.ingredients
            .get(&id)
            .map_or_else(|| id.to_string(), |i| i.name.clone())
    }

    pub(crate) fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.id, ingredient);
    }

    pub(crate) fn set_dependencies(&mut self, id: i64, deps: Vec<i64>) {
        self.dependencies.insert(id, deps);
    }

    pub(crate) fn set_incompatibilities(&mut self, id: i64, others: Vec<i64>) {
        self.incompatibilities.insert(id, others);
    }
}

/// Load the snapshot for one candidate set.
///
/// Unknown candidate ids are simply absent from the snapshot; the evaluator
/// turns that into the corresponding violation.
pub async fn snapshot(
    conn: &mut SqliteConnection,
    candidate_ids: &[i64],
) -> RepoResult<CatalogSnapshot> {
    let mut snap = CatalogSnapshot::default();
    for ingredient in ingredients_by_ids(&mut *conn, candidate_ids).await? {
        snap.add_ingredient(ingredient);
    }

    let mut outside_targets: Vec<i64> = Vec::new();
    for &id in candidate_ids {
        if snap.ingredient(id).is_none() {
            continue;
        }
        let deps = dependencies_of(&mut *conn, id).await?;
        for &dep in &deps {
            if snap.ingredient(dep).is_none() && !outside_targets.contains(&dep) {
                outside_targets.push(dep);
            }
        }
        snap.set_dependencies(id, deps);
        snap.set_incompatibilities(id, incompatibilities_of(&mut *conn, id).await?);
    }

    for ingredient in ingredients_by_ids(&mut *conn, &outside_targets).await? {
        snap.add_ingredient(ingredient);
    }

    Ok(snap)
}

// =============================================================================
// Provisioning (out-of-band seeding and tests)
// =============================================================================

pub async fn create_dish(pool: &SqlitePool, data: DishCreate) -> RepoResult<Dish> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    let id = sqlx::query_scalar::<_, i64>("INSERT INTO dish (name) VALUES (?) RETURNING id")
        .bind(&data.name)
        .fetch_one(pool)
        .await?;
    Ok(Dish {
        id,
        name: data.name,
    })
}

pub async fn create_size(pool: &SqlitePool, data: SizeCreate) -> RepoResult<Size> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    require_non_negative(data.price, "price")?;
    if data.max_ingredients < 0 {
        return Err(RepoError::Validation(
            "max_ingredients must be non-negative".into(),
        ));
    }
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO size (name, price, max_ingredients) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.max_ingredients)
    .fetch_one(pool)
    .await?;
    Ok(Size {
        id,
        name: data.name,
        price: data.price,
        max_ingredients: data.max_ingredients,
    })
}

pub async fn create_ingredient(pool: &SqlitePool, data: IngredientCreate) -> RepoResult<Ingredient> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    require_non_negative(data.price, "price")?;
    if let Some(availability) = data.availability
        && availability < 0
    {
        return Err(RepoError::Validation(
            "availability must be non-negative".into(),
        ));
    }
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO ingredient (name, price, availability) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.availability)
    .fetch_one(pool)
    .await?;
    Ok(Ingredient {
        id,
        name: data.name,
        price: data.price,
        availability: data.availability,
    })
}

pub async fn add_dependency(
    pool: &SqlitePool,
    ingredient_id: i64,
    depends_on_id: i64,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO ingredient_dependency (ingredient_id, depends_on_id) VALUES (?, ?)")
        .bind(ingredient_id)
        .bind(depends_on_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn add_incompatibility(
    pool: &SqlitePool,
    ingredient_a: i64,
    ingredient_b: i64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO ingredient_incompatibility (ingredient_a, ingredient_b) VALUES (?, ?)",
    )
    .bind(ingredient_a)
    .bind(ingredient_b)
    .execute(pool)
    .await?;
    Ok(())
}
