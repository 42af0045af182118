//! Inventory domain module (ingredient stock).
//!
//! This crate contains business rules for ingredient stock, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod ingredient;

pub use ingredient::{Ingredient, Quantity, Unit};
