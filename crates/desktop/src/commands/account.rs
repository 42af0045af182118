//! Session and credential commands.

use core::fmt;

use tablebook_accounts::{Account, Password, Username};
use tablebook_core::{DomainError, Entity};
use tablebook_store::Model;

use crate::command::{Command, CommandOutcome, CommandResult};
use crate::error::CommandError;
use crate::session::Session;

#[derive(Clone)]
pub struct LoginCommand {
    pub username: Username,
    pub password: String,
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

impl Command for LoginCommand {
    fn requires_login(&self) -> bool {
        false
    }

    fn mutates(&self) -> bool {
        false
    }

    fn execute(&self, model: &mut dyn Model, session: &mut Session) -> CommandResult {
        if session.is_logged_in() {
            return Err(CommandError::AlreadyLoggedIn);
        }
        if !model
            .account_list()
            .iter()
            .any(|a| a.authenticates(&self.username, &self.password))
        {
            return Err(CommandError::InvalidCredentials);
        }

        session.login(self.username.clone());
        Ok(CommandOutcome::new(format!("Logged in as {}", self.username)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutCommand;

impl Command for LogoutCommand {
    fn mutates(&self) -> bool {
        false
    }

    fn execute(&self, _model: &mut dyn Model, session: &mut Session) -> CommandResult {
        session.logout().ok_or(CommandError::NotLoggedIn)?;
        Ok(CommandOutcome::new("Logged out"))
    }
}

/// Change the logged-in account's password. Undoable like any edit.
#[derive(Clone)]
pub struct ChangePasswordCommand {
    pub current: String,
    pub new: Password,
}

impl fmt::Debug for ChangePasswordCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordCommand")
            .field("current", &"****")
            .field("new", &self.new)
            .finish()
    }
}

impl Command for ChangePasswordCommand {
    fn mutates(&self) -> bool {
        true
    }

    fn execute(&self, model: &mut dyn Model, session: &mut Session) -> CommandResult {
        let username = session.user().ok_or(CommandError::NotLoggedIn)?;
        let account: Account = model
            .account_list()
            .iter()
            .find(|a| a.username() == username)
            .cloned()
            .ok_or_else(|| DomainError::not_found(Account::KIND))?;

        if !account.password().matches(&self.current) {
            return Err(CommandError::InvalidCredentials);
        }

        model.set_account(&account, account.with_password(self.new.clone()))?;
        model.commit();
        Ok(CommandOutcome::new("Password changed"))
    }
}
