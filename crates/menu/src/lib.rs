//! Menu domain module (items offered for sale and their recipes).

pub mod item;

pub use item::{Item, Portion, Recipe};
