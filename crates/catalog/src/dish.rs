//! Dish (menu item) configuration.

use serde::{Deserialize, Serialize};

use menucost_core::{DishId, DomainError, DomainResult, Entity};

/// Entity: Dish (menu item).
///
/// Prices are whole currency units (yen); the core never formats currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    id: DishId,
    name: String,
    category: String,
    selling_price: f64,
    estimated_food_cost: f64,
    is_signature: bool,
}

impl Dish {
    pub fn new(
        id: DishId,
        name: impl Into<String>,
        category: impl Into<String>,
        selling_price: f64,
        estimated_food_cost: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("dish name cannot be empty"));
        }
        if selling_price < 0.0 || estimated_food_cost < 0.0 {
            return Err(DomainError::validation(format!(
                "dish '{name}': prices must be non-negative"
            )));
        }
        Ok(Self {
            id,
            name,
            category: category.into(),
            selling_price,
            estimated_food_cost,
            is_signature: false,
        })
    }

    pub fn signature(mut self) -> Self {
        self.is_signature = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn selling_price(&self) -> f64 {
        self.selling_price
    }

    pub fn estimated_food_cost(&self) -> f64 {
        self.estimated_food_cost
    }

    pub fn is_signature(&self) -> bool {
        self.is_signature
    }

    /// Contribution margin of one sold serving.
    pub fn unit_margin(&self) -> f64 {
        self.selling_price - self.estimated_food_cost
    }
}

impl Entity for Dish {
    type Id = DishId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
