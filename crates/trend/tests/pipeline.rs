//! End-to-end pipeline: raw records → reconciled windows → ratios →
//! trend series and menu quadrants.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use menucost_catalog::{Dish, Ingredient, RatioTargets, RecipeMap};
use menucost_core::{DishId, Entity, IngredientId, VendorId};
use menucost_menu::{classify, DishPerformance, MenuQuadrant};
use menucost_reconcile::{
    assess_against_targets, reconcile_batch, DateWindow, PurchaseRecord, SaleRecord,
};
use menucost_trend::{aggregate, Forecaster, Granularity, PeriodKey, SeasonalBaseline, SeriesPoint};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn month_window(y: i32, m: u32, last_day: u32) -> DateWindow {
    DateWindow::new(date(y, m, 1), date(y, m, last_day)).unwrap()
}

struct Fixture {
    tenderloin: Ingredient,
    caviar: Ingredient,
    beef_dish: DishId,
    caviar_dish: DishId,
    recipes: RecipeMap,
    purchases: Vec<PurchaseRecord>,
    sales: Vec<SaleRecord>,
}

fn fixture() -> Fixture {
    let kg_table: BTreeMap<String, f64> =
        [("kg".to_string(), 1000.0), ("g".to_string(), 1.0)].into();
    let pc_table: BTreeMap<String, f64> = [("pc".to_string(), 100.0), ("g".to_string(), 1.0)].into();

    let tenderloin = Ingredient::new(
        IngredientId::new(),
        "Wagyu Tenderloin",
        "g",
        65.0,
        kg_table,
    )
    .unwrap()
    .with_targets(RatioTargets {
        waste_ratio_target: 0.15,
        cost_ratio_target: 0.35,
    });
    // Caviar ships in 100g tins, no trim loss.
    let caviar = Ingredient::new(IngredientId::new(), "KAVIARI キャビア", "g", 100.0, pc_table)
        .unwrap()
        .with_targets(RatioTargets {
            waste_ratio_target: 0.10,
            cost_ratio_target: 0.25,
        });

    let beef_dish = DishId::new();
    let caviar_dish = DishId::new();
    let mut recipes = RecipeMap::new();
    recipes.insert(beef_dish, *tenderloin.id(), 150.0).unwrap();
    recipes.insert(caviar_dish, *caviar.id(), 10.0).unwrap();

    let vendor = VendorId::new();
    let purchases = vec![
        // January: 4kg tenderloin (2600g usable), 5 tins caviar (500g).
        PurchaseRecord {
            ingredient_id: *tenderloin.id(),
            vendor_id: vendor,
            invoice_date: date(2025, 1, 6),
            raw_quantity: 4.0,
            raw_unit: "kg".to_string(),
            unit_cost: 12_000.0,
        },
        PurchaseRecord {
            ingredient_id: *caviar.id(),
            vendor_id: vendor,
            invoice_date: date(2025, 1, 8),
            raw_quantity: 5.0,
            raw_unit: "個".to_string(), // alias of pc
            unit_cost: 19_500.0,
        },
        // March: 2kg tenderloin (1300g usable).
        PurchaseRecord {
            ingredient_id: *tenderloin.id(),
            vendor_id: vendor,
            invoice_date: date(2025, 3, 4),
            raw_quantity: 2.0,
            raw_unit: "kg".to_string(),
            unit_cost: 12_500.0,
        },
    ];

    let sales = vec![
        // January: 12 beef servings (1800g), 30 caviar servings (300g).
        SaleRecord {
            dish_id: beef_dish,
            sale_date: date(2025, 1, 15),
            quantity_sold: 12.0,
            ingredient_id: *tenderloin.id(),
            unit_price: 5_682.0,
        },
        SaleRecord {
            dish_id: caviar_dish,
            sale_date: date(2025, 1, 18),
            quantity_sold: 30.0,
            ingredient_id: *caviar.id(),
            unit_price: 3_247.0,
        },
        // March: 6 beef servings (900g).
        SaleRecord {
            dish_id: beef_dish,
            sale_date: date(2025, 3, 20),
            quantity_sold: 6.0,
            ingredient_id: *tenderloin.id(),
            unit_price: 5_682.0,
        },
    ];

    Fixture {
        tenderloin,
        caviar,
        beef_dish,
        caviar_dish,
        recipes,
        purchases,
        sales,
    }
}

#[test]
fn batch_reconciles_both_ingredients_and_rolls_into_monthly_series() {
    menucost_observability::init();
    let f = fixture();
    let windows = vec![month_window(2025, 1, 31), month_window(2025, 3, 31)];

    let report = reconcile_batch(
        &f.purchases,
        &f.sales,
        &f.recipes,
        &[f.tenderloin.clone(), f.caviar.clone()],
        &windows,
    );

    // Caviar has no March activity: that unit fails (undefined ratio), the
    // other three succeed.
    assert_eq!(report.ratios.len(), 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].ingredient, "KAVIARI キャビア");

    // January tenderloin: 2600g usable vs 1800g sold → waste 800/2600.
    let beef_jan = report
        .ratios
        .iter()
        .find(|r| r.ingredient_id == *f.tenderloin.id() && r.period.month() == 1)
        .unwrap();
    assert!((beef_jan.waste_ratio - 800.0 / 2600.0).abs() < 1e-9);
    // 48,000 purchase cost vs 68,184 revenue.
    assert!((beef_jan.cost_ratio - 48_000.0 / 68_184.0).abs() < 1e-9);

    // Tenderloin trend over the two months present: exactly two points,
    // January first, no fabricated February.
    let beef_ratios: Vec<_> = report
        .ratios
        .iter()
        .filter(|r| r.ingredient_id == *f.tenderloin.id())
        .cloned()
        .collect();
    let series = aggregate(&beef_ratios, Granularity::Month);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].period, PeriodKey::Month { year: 2025, month: 1 });
    assert_eq!(series[1].period, PeriodKey::Month { year: 2025, month: 3 });

    // Target assessment: January beef waste (~30.8%) exceeds its 15% target.
    let assessment = assess_against_targets(beef_jan, f.tenderloin.targets().unwrap());
    assert!(assessment.waste_over_target);
}

#[test]
fn classification_and_forecast_consume_pipeline_output() {
    menucost_observability::init();
    let f = fixture();

    // Menu engineering over January volume and configured margins.
    let beef = Dish::new(f.beef_dish, "Beef Tenderloin", "Main", 5_682.0, 2_200.0)
        .unwrap()
        .signature();
    let caviar = Dish::new(f.caviar_dish, "Egg Toast Caviar", "Appetizer", 3_247.0, 2_925.0)
        .unwrap()
        .signature();
    let dishes = vec![
        DishPerformance {
            dish_id: *beef.id(),
            sales_volume: 12.0,
            unit_margin: beef.unit_margin(),
        },
        DishPerformance {
            dish_id: *caviar.id(),
            sales_volume: 30.0,
            unit_margin: caviar.unit_margin(),
        },
    ];
    let quadrants = classify(&dishes).unwrap();
    assert_eq!(quadrants[&f.beef_dish], MenuQuadrant::QuestionMark);
    assert_eq!(quadrants[&f.caviar_dish], MenuQuadrant::CashCow);

    // Forecast next January's beef servings from this January's.
    let history = vec![SeriesPoint {
        period: PeriodKey::Month { year: 2025, month: 1 },
        value: 12.0,
    }];
    let forecast = SeasonalBaseline::default().forecast(&history).unwrap();
    assert_eq!(
        forecast[0].period,
        PeriodKey::Month { year: 2026, month: 1 }
    );
    assert!((forecast[0].value - 13.2).abs() < 1e-9);
}
