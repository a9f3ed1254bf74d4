//! Waste and cost ratios per (ingredient, window).

use serde::{Deserialize, Serialize};

use menucost_core::{DomainResult, DomainError, IngredientId, Period};
use menucost_catalog::{Ingredient, RatioTargets};

use crate::engine::{DateWindow, ReconciliationWindow};
use crate::record::{PurchaseRecord, SaleRecord};

/// Money totals for a window, sourced from the same record sets the
/// quantities came from so the two ratios stay comparable period-for-period.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowCosts {
    pub total_purchase_cost: f64,
    pub total_sales_revenue: f64,
}

/// Sum purchase cost and sales revenue for one ingredient over one window.
pub fn window_costs(
    purchases: &[PurchaseRecord],
    sales: &[SaleRecord],
    ingredient_id: IngredientId,
    window: DateWindow,
) -> WindowCosts {
    let total_purchase_cost = purchases
        .iter()
        .filter(|r| r.ingredient_id == ingredient_id && window.contains(r.invoice_date))
        .map(PurchaseRecord::total_cost)
        .sum();
    let total_sales_revenue = sales
        .iter()
        .filter(|r| r.ingredient_id == ingredient_id && window.contains(r.sale_date))
        .map(SaleRecord::revenue)
        .sum();
    WindowCosts {
        total_purchase_cost,
        total_sales_revenue,
    }
}

/// Waste and cost ratio for one ingredient and one month.
///
/// Both ratios are fractions (0.15 = 15%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioResult {
    pub ingredient_id: IngredientId,
    pub period: Period,
    /// Unconsumed usable quantity over purchased usable quantity.
    pub waste_ratio: f64,
    /// Purchase cost over sales revenue.
    pub cost_ratio: f64,
}

/// Derive the ratio pair from a reconciled window and its money totals.
///
/// `waste_ratio = max(0, delta) / purchased_usable_qty`; an over-sold window
/// (negative delta) therefore reads as zero waste, with the anomaly carried
/// by the window's flag rather than hidden here. Zero denominators are
/// signalled as [`DomainError::UndefinedRatio`], never returned as NaN or a
/// silent zero. The result period is the calendar month of the window start.
pub fn compute_ratios(
    window: &ReconciliationWindow,
    costs: &WindowCosts,
    ingredient: &Ingredient,
) -> DomainResult<RatioResult> {
    let period = Period::from_date(window.period_start);

    if window.purchased_usable_qty <= 0.0 {
        return Err(DomainError::undefined_ratio(
            ingredient.name(),
            period.to_string(),
            "waste ratio",
            "purchased usable quantity",
        ));
    }
    let waste_ratio = window.delta.max(0.0) / window.purchased_usable_qty;

    if costs.total_sales_revenue <= 0.0 {
        return Err(DomainError::undefined_ratio(
            ingredient.name(),
            period.to_string(),
            "cost ratio",
            "sales revenue",
        ));
    }
    let cost_ratio = costs.total_purchase_cost / costs.total_sales_revenue;

    Ok(RatioResult {
        ingredient_id: window.ingredient_id,
        period,
        waste_ratio,
        cost_ratio,
    })
}

/// Comparison of a ratio result against an ingredient's configured targets.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetAssessment {
    pub waste_over_target: bool,
    pub cost_over_target: bool,
    /// waste_ratio − target, positive when over.
    pub waste_excess: f64,
    /// cost_ratio − target, positive when over.
    pub cost_excess: f64,
}

/// Assess a result against per-ingredient targets (both fractions).
pub fn assess_against_targets(result: &RatioResult, targets: &RatioTargets) -> TargetAssessment {
    let waste_excess = result.waste_ratio - targets.waste_ratio_target;
    let cost_excess = result.cost_ratio - targets.cost_ratio_target;
    TargetAssessment {
        waste_over_target: waste_excess > 0.0,
        cost_over_target: cost_excess > 0.0,
        waste_excess,
        cost_excess,
    }
}
