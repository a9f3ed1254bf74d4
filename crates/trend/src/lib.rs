//! Trend aggregation and the forecasting seam.
//!
//! Rolls per-month ratio results into chronological series for downstream
//! year-over-year analysis. The statistical model itself lives behind the
//! [`Forecaster`] trait; only the deterministic seasonal baseline ships
//! in-core.

pub mod aggregate;
pub mod forecast;

pub use aggregate::{aggregate, Granularity, PeriodKey, TrendPoint};
pub use forecast::{raw_quantity_needed, Forecaster, SeasonalBaseline, SeriesPoint};
