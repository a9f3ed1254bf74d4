//! Recipe mapping: dish → per-serving ingredient quantities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use menucost_core::{DishId, DomainError, DomainResult, IngredientId};

/// Externally-supplied mapping from dishes to the quantity of each tracked
/// ingredient one sold serving consumes, in the ingredient's canonical unit.
///
/// Reconciliation refuses to guess: a sale attributed to an ingredient whose
/// dish has no entry here fails loudly rather than under-counting waste.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeMap {
    entries: HashMap<DishId, HashMap<IngredientId, f64>>,
}

impl RecipeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that one serving of `dish` consumes `qty_per_serving` of
    /// `ingredient` (canonical unit).
    pub fn insert(
        &mut self,
        dish: DishId,
        ingredient: IngredientId,
        qty_per_serving: f64,
    ) -> DomainResult<()> {
        if !(qty_per_serving.is_finite() && qty_per_serving > 0.0) {
            return Err(DomainError::validation(format!(
                "per-serving quantity for dish {dish} / ingredient {ingredient} must be positive, got {qty_per_serving}"
            )));
        }
        self.entries
            .entry(dish)
            .or_default()
            .insert(ingredient, qty_per_serving);
        Ok(())
    }

    /// Per-serving quantity of `ingredient` in `dish`, if mapped.
    pub fn quantity_per_serving(&self, dish: DishId, ingredient: IngredientId) -> Option<f64> {
        self.entries
            .get(&dish)
            .and_then(|by_ingredient| by_ingredient.get(&ingredient))
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
