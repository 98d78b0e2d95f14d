//! Money arithmetic
//!
//! Totals are computed with `Decimal` and exposed as `f64` rounded to two
//! decimal places (half-up), matching how prices are stored.

use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;
use shared::models::{Ingredient, Size};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Order total: size base price plus the selected ingredient prices,
/// snapshotted at creation time.
pub fn order_total(size: &Size, ingredients: &[&Ingredient]) -> f64 {
    let total = ingredients
        .iter()
        .fold(to_decimal(size.price), |acc, ingredient| {
            acc + to_decimal(ingredient.price)
        });
    to_f64(total)
}
