//! Accounts domain module (staff logins).
//!
//! Pure, validated records; authentication decisions live with the command layer.

pub mod account;

pub use account::{Account, Password, Username};
