use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use menucost_core::{DomainError, DomainResult, Entity, IngredientId};

use crate::units::fold_alias;

/// Broad ingredient category, derived from item-name patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Meat,
    Seafood,
    Dairy,
    Produce,
    Condiments,
    Other,
}

impl IngredientCategory {
    /// Categorize by substring patterns on the (lowercased) item name.
    /// Unmatched names land in `Other`.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        let matches = |patterns: &[&str]| patterns.iter().any(|p| lower.contains(p));

        if matches(&["beef", "tenderloin", "wagyu", "pork", "chicken", "duck", "和牛", "ヒレ"]) {
            Self::Meat
        } else if matches(&["caviar", "fish", "uni", "scallop", "prawn", "キャビア", "魚"]) {
            Self::Seafood
        } else if matches(&["butter", "cream", "milk", "cheese", "バター", "ブール"]) {
            Self::Dairy
        } else if matches(&["mushroom", "girolles", "truffle", "herb", "ジロール", "野菜"]) {
            Self::Produce
        } else if matches(&["vinegar", "oil", "salt", "sauce", "ヴィネガー"]) {
            Self::Condiments
        } else {
            Self::Other
        }
    }
}

/// Per-ingredient target ratios, both expressed as fractions (0.15 = 15%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioTargets {
    /// Maximum acceptable waste ratio.
    pub waste_ratio_target: f64,
    /// Target food-cost ratio.
    pub cost_ratio_target: f64,
}

/// Entity: Ingredient configuration.
///
/// Holds everything reconciliation needs to make purchase and sale
/// quantities comparable: the canonical unit, the raw-unit conversion table
/// and the post-trim yield percent. Configuration is edited externally;
/// computations take the ingredient by reference so a historical window
/// recomputed with the settings it was configured with stays reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    id: IngredientId,
    name: String,
    category: IngredientCategory,
    canonical_unit: String,
    /// Yield after trimming, in percent, in (0, 100].
    yield_percent: f64,
    /// Canonical raw-unit token → factor into `canonical_unit`.
    conversion_table: BTreeMap<String, f64>,
    targets: Option<RatioTargets>,
}

impl Ingredient {
    pub fn new(
        id: IngredientId,
        name: impl Into<String>,
        canonical_unit: impl Into<String>,
        yield_percent: f64,
        conversion_table: BTreeMap<String, f64>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("ingredient name cannot be empty"));
        }
        if !(yield_percent > 0.0 && yield_percent <= 100.0) {
            return Err(DomainError::invalid_yield(yield_percent));
        }
        for (unit, factor) in &conversion_table {
            if !(factor.is_finite() && *factor > 0.0) {
                return Err(DomainError::validation(format!(
                    "conversion factor for unit '{unit}' of ingredient '{name}' must be positive, got {factor}"
                )));
            }
        }
        let category = IngredientCategory::from_name(&name);
        Ok(Self {
            id,
            name,
            category,
            canonical_unit: canonical_unit.into(),
            yield_percent,
            conversion_table,
            targets: None,
        })
    }

    pub fn with_targets(mut self, targets: RatioTargets) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> IngredientCategory {
        self.category
    }

    pub fn canonical_unit(&self) -> &str {
        &self.canonical_unit
    }

    pub fn yield_percent(&self) -> f64 {
        self.yield_percent
    }

    pub fn targets(&self) -> Option<&RatioTargets> {
        self.targets.as_ref()
    }

    /// Conversion factor from a raw unit into the canonical unit.
    ///
    /// The raw unit is alias-folded first; an absent entry is a hard error
    /// naming both the ingredient and the offending unit.
    pub fn conversion_factor(&self, raw_unit: &str) -> DomainResult<f64> {
        let unit = fold_alias(raw_unit);
        self.conversion_table
            .get(&unit)
            .copied()
            .ok_or_else(|| DomainError::unknown_unit(&self.name, unit))
    }
}

impl Entity for Ingredient {
    type Id = IngredientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(u, f)| (u.to_string(), *f)).collect()
    }

    fn tenderloin() -> Ingredient {
        Ingredient::new(
            IngredientId::new(),
            "Wagyu Tenderloin",
            "g",
            65.0,
            table(&[("kg", 1000.0), ("g", 1.0)]),
        )
        .unwrap()
    }

    #[test]
    fn conversion_factor_resolves_aliases() {
        let ing = tenderloin();
        assert_eq!(ing.conversion_factor("キログラム").unwrap(), 1000.0);
        assert_eq!(ing.conversion_factor(" Kg ").unwrap(), 1000.0);
    }

    #[test]
    fn missing_factor_is_a_hard_error() {
        let ing = tenderloin();
        let err = ing.conversion_factor("firkin").unwrap_err();
        assert_eq!(
            err,
            DomainError::unknown_unit("Wagyu Tenderloin", "firkin")
        );
    }

    #[test]
    fn zero_or_negative_yield_is_rejected() {
        for bad in [0.0, -5.0, 120.0] {
            let err = Ingredient::new(
                IngredientId::new(),
                "Caviar",
                "g",
                bad,
                table(&[("g", 1.0)]),
            )
            .unwrap_err();
            assert_eq!(err, DomainError::invalid_yield(bad));
        }
    }

    #[test]
    fn non_positive_conversion_factor_is_rejected() {
        let err = Ingredient::new(
            IngredientId::new(),
            "Caviar",
            "g",
            100.0,
            table(&[("pc", -100.0)]),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn category_is_derived_from_name_patterns() {
        assert_eq!(
            IngredientCategory::from_name("KAVIARI キャビア"),
            IngredientCategory::Seafood
        );
        assert_eq!(
            IngredientCategory::from_name("和牛ヒレ"),
            IngredientCategory::Meat
        );
        assert_eq!(
            IngredientCategory::from_name("mystery item"),
            IngredientCategory::Other
        );
    }
}
