//! Roll per-month ratios into chronological series.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use menucost_core::Period;
use menucost_reconcile::RatioResult;

/// Roll-up granularity for trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Month,
    Quarter,
    Year,
}

/// A period key at roll-up granularity. Orders chronologically within one
/// granularity (a single `aggregate` call never mixes them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKey {
    Month { year: i32, month: u32 },
    Quarter { year: i32, quarter: u32 },
    Year { year: i32 },
}

impl PeriodKey {
    pub fn from_period(period: Period, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Month => Self::Month {
                year: period.year(),
                month: period.month(),
            },
            Granularity::Quarter => Self::Quarter {
                year: period.year(),
                quarter: period.quarter(),
            },
            Granularity::Year => Self::Year {
                year: period.year(),
            },
        }
    }
}

impl core::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Quarter { year, quarter } => write!(f, "{year:04}-Q{quarter}"),
            Self::Year { year } => write!(f, "{year:04}"),
        }
    }
}

/// One point of an aggregated trend series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: PeriodKey,
    pub waste_ratio: f64,
    pub cost_ratio: f64,
}

/// Aggregate per-month ratio results into an ascending trend series.
///
/// One point per period present in the input — gaps stay absent, never
/// fabricated; imputation policy belongs to the forecasting consumer.
/// Months falling in the same coarser bucket are averaged.
pub fn aggregate(ratios: &[RatioResult], granularity: Granularity) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<PeriodKey, (f64, f64, usize)> = BTreeMap::new();

    for r in ratios {
        let key = PeriodKey::from_period(r.period, granularity);
        let bucket = buckets.entry(key).or_insert((0.0, 0.0, 0));
        bucket.0 += r.waste_ratio;
        bucket.1 += r.cost_ratio;
        bucket.2 += 1;
    }

    buckets
        .into_iter()
        .map(|(period, (waste_sum, cost_sum, n))| TrendPoint {
            period,
            waste_ratio: waste_sum / n as f64,
            cost_ratio: cost_sum / n as f64,
        })
        .collect()
}
