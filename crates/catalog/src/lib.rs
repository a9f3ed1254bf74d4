//! Ingredient, dish and vendor configuration.
//!
//! This crate holds the externally-editable configuration the reconciliation
//! core reads: ingredient conversion tables and yields, per-serving recipe
//! quantities, vendor name cleanup, and the translation seam. Pure data and
//! deterministic lookups; no IO, no HTTP, no storage.

pub mod dish;
pub mod ingredient;
pub mod recipe;
pub mod translate;
pub mod units;
pub mod vendor;

pub use dish::Dish;
pub use ingredient::{Ingredient, IngredientCategory, RatioTargets};
pub use recipe::RecipeMap;
pub use translate::{TableTranslator, TranslateError, Translator};
pub use units::fold_alias;
pub use vendor::{Vendor, VendorDirectory};
