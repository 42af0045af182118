//! `tablebook-desktop`
//!
//! **Responsibility:** run user commands against the versioned dataset.
//!
//! This crate provides:
//! - `Session`: who is logged in, passed explicitly to every command
//! - `Command` and the concrete commands (entity edits, history, sales, login)
//! - `App`: the login gate, command execution and outcome logging
//!
//! Parsing user input and rendering results are left to the shell around it.

pub mod app;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;

pub use app::App;
pub use command::{Command, CommandOutcome, CommandResult};
pub use config::AppConfig;
pub use error::CommandError;
pub use session::Session;
