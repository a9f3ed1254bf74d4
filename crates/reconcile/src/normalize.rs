//! Unit normalization: invoice quantity → canonical-unit quantity.

use menucost_core::{DomainError, DomainResult, Entity, NormalizedQuantity};
use menucost_catalog::Ingredient;

use crate::record::PurchaseRecord;

/// Convert a purchase record's raw quantity into the ingredient's canonical
/// unit via its conversion table.
///
/// Pure and deterministic. A raw unit with no configured factor fails with
/// [`DomainError::UnknownUnit`]; a record for a different ingredient is a
/// validation error rather than a silent zero.
pub fn normalize(
    record: &PurchaseRecord,
    ingredient: &Ingredient,
) -> DomainResult<NormalizedQuantity> {
    if record.ingredient_id != *ingredient.id() {
        return Err(DomainError::validation(format!(
            "purchase record for ingredient {} passed to normalizer for '{}'",
            record.ingredient_id,
            ingredient.name()
        )));
    }
    if !(record.raw_quantity.is_finite() && record.raw_quantity >= 0.0) {
        return Err(DomainError::validation(format!(
            "raw quantity for ingredient '{}' on {} must be non-negative, got {}",
            ingredient.name(),
            record.invoice_date,
            record.raw_quantity
        )));
    }
    let factor = ingredient.conversion_factor(&record.raw_unit)?;
    Ok(NormalizedQuantity::new(record.raw_quantity * factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use menucost_core::{IngredientId, VendorId};
    use std::collections::BTreeMap;

    fn ingredient(id: IngredientId) -> Ingredient {
        let table: BTreeMap<String, f64> =
            [("kg".to_string(), 1000.0), ("g".to_string(), 1.0)].into();
        Ingredient::new(id, "Wagyu Tenderloin", "g", 65.0, table).unwrap()
    }

    fn record(id: IngredientId, qty: f64, unit: &str) -> PurchaseRecord {
        PurchaseRecord {
            ingredient_id: id,
            vendor_id: VendorId::new(),
            invoice_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            raw_quantity: qty,
            raw_unit: unit.to_string(),
            unit_cost: 12_000.0,
        }
    }

    #[test]
    fn kilograms_normalize_to_grams() {
        let id = IngredientId::new();
        let qty = normalize(&record(id, 2.5, "kg"), &ingredient(id)).unwrap();
        assert_eq!(qty.value(), 2500.0);
    }

    #[test]
    fn unknown_unit_fails_with_ingredient_and_unit() {
        let id = IngredientId::new();
        let err = normalize(&record(id, 1.0, "firkin"), &ingredient(id)).unwrap_err();
        assert_eq!(err, DomainError::unknown_unit("Wagyu Tenderloin", "firkin"));
    }

    #[test]
    fn mismatched_ingredient_is_rejected() {
        let err = normalize(
            &record(IngredientId::new(), 1.0, "kg"),
            &ingredient(IngredientId::new()),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let id = IngredientId::new();
        let err = normalize(&record(id, -1.0, "kg"), &ingredient(id)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
