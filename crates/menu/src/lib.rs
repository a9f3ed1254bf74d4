//! Menu engineering: BCG-matrix classification of menu items.
//!
//! Deterministic domain logic only; the scatter plot belongs to the caller.

pub mod classify;

pub use classify::{classify, DishPerformance, MenuQuadrant};
