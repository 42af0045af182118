//! Sales domain module (daily sales records).
//!
//! One record per item per day; revenue is derived, never stored.

pub mod record;

pub use record::{QuantitySold, SalesRecord};
