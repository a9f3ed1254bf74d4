//! BCG-style menu engineering: quadrants from relative volume and margin.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use menucost_core::{DishId, DomainError, DomainResult};

/// Profitability/popularity quadrant for one dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuQuadrant {
    /// High volume, high margin: maintain and promote.
    Star,
    /// High volume, low margin.
    CashCow,
    /// Low volume, high margin.
    QuestionMark,
    /// Low volume, low margin.
    Dog,
}

/// One dish's observed performance over the analysis range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DishPerformance {
    pub dish_id: DishId,
    pub sales_volume: f64,
    pub unit_margin: f64,
}

/// Classify dishes into quadrants against the medians of the input set.
///
/// Thresholds are the medians of the dishes passed in, never fixed
/// constants: profitability is relative to the current menu mix. Ties at
/// either median go to the high (≥) branch, as policy. Fewer than 2 dishes
/// cannot produce a meaningful median and fail with
/// [`DomainError::InsufficientData`].
pub fn classify(dishes: &[DishPerformance]) -> DomainResult<HashMap<DishId, MenuQuadrant>> {
    if dishes.len() < 2 {
        return Err(DomainError::insufficient_data(2, dishes.len()));
    }

    let median_volume = median(dishes.iter().map(|d| d.sales_volume));
    let median_margin = median(dishes.iter().map(|d| d.unit_margin));

    Ok(dishes
        .iter()
        .map(|d| {
            let high_volume = d.sales_volume >= median_volume;
            let high_margin = d.unit_margin >= median_margin;
            let quadrant = match (high_volume, high_margin) {
                (true, true) => MenuQuadrant::Star,
                (true, false) => MenuQuadrant::CashCow,
                (false, true) => MenuQuadrant::QuestionMark,
                (false, false) => MenuQuadrant::Dog,
            };
            (d.dish_id, quadrant)
        })
        .collect())
}

/// Median of a non-empty sequence; even counts average the middle pair.
fn median(values: impl Iterator<Item = f64>) -> f64 {
    let mut sorted: Vec<f64> = values.collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}
