//! Raw input records, immutable once ingested.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use menucost_core::{DishId, IngredientId, VendorId};

/// One invoice line for a tracked ingredient.
///
/// `raw_quantity`/`raw_unit` are exactly what the invoice said; nothing is
/// normalized at ingestion so reconciliation can always be recomputed from
/// source under current configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub ingredient_id: IngredientId,
    pub vendor_id: VendorId,
    pub invoice_date: NaiveDate,
    pub raw_quantity: f64,
    pub raw_unit: String,
    /// Cost per `raw_unit`, whole currency units.
    pub unit_cost: f64,
}

impl PurchaseRecord {
    /// Total invoice-line cost.
    pub fn total_cost(&self) -> f64 {
        self.raw_quantity * self.unit_cost
    }
}

/// One sales line for a dish, attributed to a tracked ingredient through the
/// recipe mapping at ingestion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub dish_id: DishId,
    pub sale_date: NaiveDate,
    pub quantity_sold: f64,
    pub ingredient_id: IngredientId,
    /// Price per sold serving, whole currency units.
    pub unit_price: f64,
}

impl SaleRecord {
    /// Total sales revenue for the line.
    pub fn revenue(&self) -> f64 {
        self.quantity_sold * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_total_cost_multiplies_quantity_and_unit_cost() {
        let rec = PurchaseRecord {
            ingredient_id: IngredientId::new(),
            vendor_id: VendorId::new(),
            invoice_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            raw_quantity: 2.5,
            raw_unit: "kg".to_string(),
            unit_cost: 12_000.0,
        };
        assert_eq!(rec.total_cost(), 30_000.0);
    }

    #[test]
    fn sale_revenue_multiplies_quantity_and_price() {
        let rec = SaleRecord {
            dish_id: DishId::new(),
            sale_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            quantity_sold: 4.0,
            ingredient_id: IngredientId::new(),
            unit_price: 5_682.0,
        };
        assert_eq!(rec.revenue(), 22_728.0);
    }
}
