//! Constraint Evaluator
//!
//! Pure rules over one candidate ingredient set. Checks run in a fixed
//! precedence order and the first failure wins. The manager re-runs the
//! evaluation inside the commit transaction, so a stale advisory check can
//! never admit an illegal order.

use crate::db::repository::catalog::CatalogSnapshot;
use shared::models::Size;
use shared::order::Violation;
use std::collections::HashSet;

/// Decide whether `candidates` is a legal ingredient set for `size`.
///
/// Precedence: existence, stock, size capacity, dependency closure,
/// incompatibility. Candidates are iterated in input order, so the first
/// offending ingredient (and its first offending edge) is the one named.
pub fn evaluate(
    candidates: &[i64],
    size: &Size,
    catalog: &CatalogSnapshot,
) -> Result<(), Violation> {
    // 1. Existence
    let mut selected = Vec::with_capacity(candidates.len());
    for &id in candidates {
        match catalog.ingredient(id) {
            Some(ingredient) => selected.push(ingredient),
            None => return Err(Violation::UnknownIngredient { id }),
        }
    }

    // 2. Stock (advisory here; the ledger's conditional decrement closes
    //    the race at commit time)
    for ingredient in &selected {
        if let Some(available) = ingredient.availability
            && available <= 0
        {
            return Err(Violation::OutOfStock {
                ingredient: ingredient.name.clone(),
            });
        }
    }

    // 3. Size capacity (an empty set passes every remaining check)
    if selected.len() as i64 > size.max_ingredients {
        return Err(Violation::SizeLimitExceeded {
            size: size.name.clone(),
            limit: size.max_ingredients,
        });
    }

    let chosen: HashSet<i64> = candidates.iter().copied().collect();

    // 4. Dependency closure — direct edges only; a membership test cannot
    //    loop even on cyclic dependency data
    for ingredient in &selected {
        for &dep in catalog.dependencies_of(ingredient.id) {
            if !chosen.contains(&dep) {
                return Err(Violation::MissingDependency {
                    ingredient: ingredient.name.clone(),
                    requires: catalog.ingredient_name(dep),
                });
            }
        }
    }

    // 5. Incompatibility (edges already carry both orientations)
    for ingredient in &selected {
        for &other in catalog.incompatibilities_of(ingredient.id) {
            if chosen.contains(&other) {
                return Err(Violation::Incompatible {
                    ingredient: ingredient.name.clone(),
                    conflicts_with: catalog.ingredient_name(other),
                });
            }
        }
    }

    Ok(())
}
