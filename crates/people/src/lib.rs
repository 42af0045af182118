//! People domain module (customers and staff contacts).
//!
//! Validated contact records; no IO, no storage.

pub mod person;

pub use person::{Address, Email, Person, Phone};
