//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable by the caller: a failure aborts the
/// computation for one ingredient/window/dish only, never a whole batch.
/// Variants carry enough context (ingredient, unit, date range) that the
/// presentation layer can render a specific message without extra lookups.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A purchase record's raw unit has no entry in the ingredient's
    /// conversion table. A missing factor is a hard error, never a skip.
    #[error("unknown unit '{unit}' for ingredient '{ingredient}': no conversion factor configured")]
    UnknownUnit { ingredient: String, unit: String },

    /// Yield percent outside the valid (0, 100] range.
    #[error("invalid yield {yield_percent}%: must be greater than 0 and at most 100")]
    InvalidYield { yield_percent: f64 },

    /// A sale references an ingredient the dish has no recipe quantity for.
    #[error("dish '{dish}' has no recipe quantity mapped for ingredient '{ingredient}'")]
    UnmappedRecipe { dish: String, ingredient: String },

    /// A ratio denominator was zero. Signalled explicitly so callers handle
    /// the no-data case instead of plotting a silent zero or NaN.
    #[error("{ratio} undefined for ingredient '{ingredient}' over {period}: {denominator} is zero")]
    UndefinedRatio {
        ingredient: String,
        period: String,
        ratio: String,
        denominator: String,
    },

    /// Too few data points to compute a meaningful result.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_unit(ingredient: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::UnknownUnit {
            ingredient: ingredient.into(),
            unit: unit.into(),
        }
    }

    pub fn invalid_yield(yield_percent: f64) -> Self {
        Self::InvalidYield { yield_percent }
    }

    pub fn unmapped_recipe(dish: impl Into<String>, ingredient: impl Into<String>) -> Self {
        Self::UnmappedRecipe {
            dish: dish.into(),
            ingredient: ingredient.into(),
        }
    }

    pub fn undefined_ratio(
        ingredient: impl Into<String>,
        period: impl Into<String>,
        ratio: &'static str,
        denominator: &'static str,
    ) -> Self {
        Self::UndefinedRatio {
            ingredient: ingredient.into(),
            period: period.into(),
            ratio: ratio.to_string(),
            denominator: denominator.to_string(),
        }
    }

    pub fn insufficient_data(needed: usize, got: usize) -> Self {
        Self::InsufficientData { needed, got }
    }
}
