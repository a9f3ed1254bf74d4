//! Purchase-to-sales reconciliation and yield-adjusted cost/waste engine.
//!
//! The pipeline runs strictly upward: raw records → normalized quantities →
//! yield-adjusted quantities → reconciled deltas → ratios. Every stage is a
//! pure function over immutable inputs; nothing here blocks on IO and
//! derived windows are always recomputed from source records.

pub mod batch;
pub mod engine;
pub mod normalize;
pub mod ratio;
pub mod record;
pub mod yield_adjust;

pub use batch::{reconcile_batch, BatchFailure, BatchReport};
pub use engine::{reconcile, DateWindow, ReconciliationWindow};
pub use normalize::normalize;
pub use ratio::{
    assess_against_targets, compute_ratios, window_costs, RatioResult, TargetAssessment,
    WindowCosts,
};
pub use record::{PurchaseRecord, SaleRecord};
pub use yield_adjust::apply_yield;
