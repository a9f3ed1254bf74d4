//! Reconciliation engine: purchases vs sales over a date window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use menucost_core::{DomainError, DomainResult, Entity, IngredientId, ValueObject};
use menucost_catalog::{Ingredient, RecipeMap};

use crate::normalize::normalize;
use crate::record::{PurchaseRecord, SaleRecord};
use crate::yield_adjust::apply_yield;

/// Inclusive date window `[start, end]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if end < start {
            return Err(DomainError::validation(format!(
                "window end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl ValueObject for DateWindow {}

impl core::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Consumed-vs-sold comparison for one (ingredient, window) pair.
///
/// Derived, recomputed on demand, never a source of truth. `anomalous` marks
/// a negative delta (sold more than purchased-usable): valid business data
/// that the caller decides how to surface, not an error, and the delta is
/// kept unclamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationWindow {
    pub ingredient_id: IngredientId,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Sum of yield-adjusted purchased quantity, canonical unit.
    pub purchased_usable_qty: f64,
    /// Sum of sold quantity attributed through the recipe mapping, canonical unit.
    pub sold_qty: f64,
    /// `purchased_usable_qty - sold_qty`; negative means over-sold.
    pub delta: f64,
    pub anomalous: bool,
}

/// Reconcile purchase and sale records for one ingredient over one window.
///
/// Both record sets are filtered to the window (inclusive) and the
/// ingredient. Purchased quantity runs through unit normalization and yield
/// adjustment; sold quantity converts servings to ingredient quantity via
/// the recipe mapping. A sale attributed to the ingredient whose dish has no
/// mapping fails with [`DomainError::UnmappedRecipe`] — under-counting waste
/// would be worse than a loud failure.
///
/// Pure function over its inputs: multiple windows are independent and safe
/// to compute in parallel.
pub fn reconcile(
    purchases: &[PurchaseRecord],
    sales: &[SaleRecord],
    ingredient: &Ingredient,
    recipes: &RecipeMap,
    window: DateWindow,
) -> DomainResult<ReconciliationWindow> {
    let ingredient_id = *ingredient.id();

    let mut purchased_usable = 0.0f64;
    for record in purchases
        .iter()
        .filter(|r| r.ingredient_id == ingredient_id && window.contains(r.invoice_date))
    {
        let normalized = normalize(record, ingredient)?;
        let usable = apply_yield(normalized, ingredient.yield_percent())?;
        purchased_usable += usable.value();
    }

    let mut sold = 0.0f64;
    for record in sales
        .iter()
        .filter(|r| r.ingredient_id == ingredient_id && window.contains(r.sale_date))
    {
        let per_serving = recipes
            .quantity_per_serving(record.dish_id, ingredient_id)
            .ok_or_else(|| {
                DomainError::unmapped_recipe(record.dish_id.to_string(), ingredient.name())
            })?;
        sold += record.quantity_sold * per_serving;
    }

    let delta = purchased_usable - sold;
    let anomalous = delta < 0.0;
    if anomalous {
        warn!(
            ingredient = ingredient.name(),
            window = %window,
            delta,
            "sold quantity exceeds purchased usable quantity"
        );
    }

    Ok(ReconciliationWindow {
        ingredient_id,
        period_start: window.start(),
        period_end: window.end(),
        purchased_usable_qty: purchased_usable,
        sold_qty: sold,
        delta,
        anomalous,
    })
}
