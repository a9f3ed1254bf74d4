//! Quantity value objects.
//!
//! The reconciliation pipeline moves quantities through two states:
//! raw invoice quantity → [`NormalizedQuantity`] (canonical unit) →
//! [`UsableQuantity`] (post-trim). The newtypes keep the states apart so a
//! raw case count can never be summed against post-yield grams by accident.
//! Full floating precision is retained throughout; rounding is a
//! presentation concern.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Quantity expressed in an ingredient's canonical unit, before yield.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedQuantity(f64);

impl NormalizedQuantity {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for NormalizedQuantity {}

/// Post-trim quantity: normalized quantity scaled by yield percent.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsableQuantity(f64);

impl UsableQuantity {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for UsableQuantity {}
