//! Reservations domain module (table bookings).
//!
//! This crate contains the booking record and its duplicate-detection rule,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod reservation;

pub use reservation::{Pax, Reservation};
