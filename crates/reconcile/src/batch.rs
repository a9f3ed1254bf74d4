//! Batch reconciliation with per-unit failure isolation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use menucost_core::{DomainError, Entity, IngredientId};
use menucost_catalog::{Ingredient, RecipeMap};

use crate::engine::{reconcile, DateWindow, ReconciliationWindow};
use crate::ratio::{compute_ratios, window_costs, RatioResult};
use crate::record::{PurchaseRecord, SaleRecord};

/// One failed (ingredient, window) unit, with enough context to render an
/// actionable message without further lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchFailure {
    pub ingredient_id: IngredientId,
    pub ingredient: String,
    pub window: DateWindow,
    pub error: DomainError,
}

impl core::fmt::Display for BatchFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} over {}: {}",
            self.ingredient, self.window, self.error
        )
    }
}

/// Successes alongside failures for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub windows: Vec<ReconciliationWindow>,
    pub ratios: Vec<RatioResult>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Windows flagged anomalous (over-sold), for caller-side display.
    pub fn anomalies(&self) -> impl Iterator<Item = &ReconciliationWindow> {
        self.windows.iter().filter(|w| w.anomalous)
    }
}

/// Reconcile every (ingredient, window) pair and compute its ratios.
///
/// A hard error aborts only its own pair; the batch continues and the
/// failure lands in the report. All pairs are independent, shared-nothing
/// computations over the same immutable record slices.
pub fn reconcile_batch(
    purchases: &[PurchaseRecord],
    sales: &[SaleRecord],
    recipes: &RecipeMap,
    ingredients: &[Ingredient],
    windows: &[DateWindow],
) -> BatchReport {
    let mut report = BatchReport::default();

    for ingredient in ingredients {
        for window in windows {
            match reconcile_one(purchases, sales, recipes, ingredient, *window) {
                Ok((reconciled, ratios)) => {
                    debug!(
                        ingredient = ingredient.name(),
                        window = %window,
                        waste_ratio = ratios.waste_ratio,
                        cost_ratio = ratios.cost_ratio,
                        "reconciled"
                    );
                    report.windows.push(reconciled);
                    report.ratios.push(ratios);
                }
                Err(error) => {
                    warn!(
                        ingredient = ingredient.name(),
                        window = %window,
                        %error,
                        "reconciliation unit failed"
                    );
                    report.failures.push(BatchFailure {
                        ingredient_id: *ingredient.id(),
                        ingredient: ingredient.name().to_string(),
                        window: *window,
                        error,
                    });
                }
            }
        }
    }

    report
}

fn reconcile_one(
    purchases: &[PurchaseRecord],
    sales: &[SaleRecord],
    recipes: &RecipeMap,
    ingredient: &Ingredient,
    window: DateWindow,
) -> Result<(ReconciliationWindow, RatioResult), DomainError> {
    let reconciled = reconcile(purchases, sales, ingredient, recipes, window)?;
    let costs = window_costs(purchases, sales, *ingredient.id(), window);
    let ratios = compute_ratios(&reconciled, &costs, ingredient)?;
    Ok((reconciled, ratios))
}
