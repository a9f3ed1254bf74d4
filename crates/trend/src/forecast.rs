//! Forecasting seam and the seasonal baseline provider.
//!
//! Forecasting is a swappable external capability behind a narrow
//! series → series interface, so the core never depends on a specific
//! model or provider. The in-core [`SeasonalBaseline`] projects each
//! observed period to the same period one year out, scaled by a growth
//! assumption and a safety-stock buffer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use menucost_core::{DomainError, DomainResult};

use crate::aggregate::PeriodKey;

/// One point of a demand (or ratio) series keyed by period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub period: PeriodKey,
    pub value: f64,
}

/// Series → series forecasting interface.
pub trait Forecaster {
    /// Produce a forecast series from a historical series. Implementations
    /// may fail (insufficient history, provider unavailable).
    fn forecast(&self, history: &[SeriesPoint]) -> DomainResult<Vec<SeriesPoint>>;
}

/// Same-period-next-year baseline with a flat growth rate and a safety
/// buffer. Deterministic; the defaults mirror a flat-growth, 10%-buffer
/// purchasing policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalBaseline {
    /// Assumed year-over-year growth (0.0 = flat).
    pub growth_rate: f64,
    /// Safety-stock buffer applied on top of the projection.
    pub safety_stock_percent: f64,
    /// Minimum history points required.
    pub min_history: usize,
}

impl Default for SeasonalBaseline {
    fn default() -> Self {
        Self {
            growth_rate: 0.0,
            safety_stock_percent: 0.10,
            min_history: 1,
        }
    }
}

impl Forecaster for SeasonalBaseline {
    fn forecast(&self, history: &[SeriesPoint]) -> DomainResult<Vec<SeriesPoint>> {
        if history.len() < self.min_history {
            return Err(DomainError::insufficient_data(
                self.min_history,
                history.len(),
            ));
        }
        let factor = (1.0 + self.growth_rate) * (1.0 + self.safety_stock_percent);
        debug!(
            points = history.len(),
            growth_rate = self.growth_rate,
            safety_stock_percent = self.safety_stock_percent,
            "projecting seasonal baseline"
        );
        Ok(history
            .iter()
            .map(|p| SeriesPoint {
                period: shift_one_year(p.period),
                value: p.value * factor,
            })
            .collect())
    }
}

fn shift_one_year(period: PeriodKey) -> PeriodKey {
    match period {
        PeriodKey::Month { year, month } => PeriodKey::Month {
            year: year + 1,
            month,
        },
        PeriodKey::Quarter { year, quarter } => PeriodKey::Quarter {
            year: year + 1,
            quarter,
        },
        PeriodKey::Year { year } => PeriodKey::Year { year: year + 1 },
    }
}

/// Raw purchase quantity needed to cover forecast servings, accounting for
/// per-serving usage and trim yield. `yield_percent` must lie in (0, 100].
pub fn raw_quantity_needed(
    forecast_servings: f64,
    usage_per_serving: f64,
    yield_percent: f64,
) -> DomainResult<f64> {
    if !(yield_percent.is_finite() && yield_percent > 0.0 && yield_percent <= 100.0) {
        return Err(DomainError::invalid_yield(yield_percent));
    }
    if forecast_servings < 0.0 || usage_per_serving < 0.0 {
        return Err(DomainError::validation(
            "forecast servings and per-serving usage must be non-negative",
        ));
    }
    Ok(forecast_servings * usage_per_serving / (yield_percent / 100.0))
}
