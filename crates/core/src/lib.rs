//! `menucost-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod period;
pub mod quantity;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{DishId, IngredientId, VendorId};
pub use period::Period;
pub use quantity::{NormalizedQuantity, UsableQuantity};
pub use value_object::ValueObject;
