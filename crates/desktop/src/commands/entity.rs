//! Add, delete and edit, written once for every entity kind.

use tablebook_accounts::Account;
use tablebook_inventory::Ingredient;
use tablebook_menu::Item;
use tablebook_people::Person;
use tablebook_reservations::Reservation;
use tablebook_sales::SalesRecord;
use tablebook_store::{Model, ModelEntity};

use crate::command::{Command, CommandOutcome, CommandResult};
use crate::error::CommandError;
use crate::session::Session;

/// Constraints that depend on who is logged in.
///
/// Only accounts have any: the logged-in account cannot be deleted, and
/// renaming it follows the session along.
pub trait SessionRules: Sized {
    fn check_remove(&self, _session: &Session) -> Result<(), CommandError> {
        Ok(())
    }

    fn after_edit(_target: &Self, _edited: &Self, _session: &mut Session) {}
}

impl SessionRules for Account {
    fn check_remove(&self, session: &Session) -> Result<(), CommandError> {
        if session.is_current(self.username()) {
            return Err(CommandError::CannotRemoveCurrentAccount);
        }
        Ok(())
    }

    fn after_edit(target: &Self, edited: &Self, session: &mut Session) {
        if session.is_current(target.username()) {
            session.login(edited.username().clone());
        }
    }
}

impl SessionRules for Person {}
impl SessionRules for Ingredient {}
impl SessionRules for Item {}
impl SessionRules for Reservation {}
impl SessionRules for SalesRecord {}

#[derive(Debug, Clone)]
pub struct AddCommand<E> {
    pub entity: E,
}

impl<E> AddCommand<E> {
    pub fn new(entity: E) -> Self {
        Self { entity }
    }
}

impl<E: ModelEntity + SessionRules> Command for AddCommand<E> {
    fn mutates(&self) -> bool {
        true
    }

    fn execute(&self, model: &mut dyn Model, _session: &mut Session) -> CommandResult {
        E::add_to(model, self.entity.clone())?;
        model.commit();
        Ok(CommandOutcome::new(format!("New {} added: {}", E::KIND, self.entity)))
    }
}

/// Removes the element fully equal to `target`.
#[derive(Debug, Clone)]
pub struct DeleteCommand<E> {
    pub target: E,
}

impl<E> DeleteCommand<E> {
    pub fn new(target: E) -> Self {
        Self { target }
    }
}

impl<E: ModelEntity + SessionRules> Command for DeleteCommand<E> {
    fn mutates(&self) -> bool {
        true
    }

    fn execute(&self, model: &mut dyn Model, session: &mut Session) -> CommandResult {
        self.target.check_remove(session)?;
        E::remove_from(model, &self.target)?;
        model.commit();
        Ok(CommandOutcome::new(format!("Deleted {}: {}", E::KIND, self.target)))
    }
}

/// Replaces `target` with `edited` in place.
#[derive(Debug, Clone)]
pub struct EditCommand<E> {
    pub target: E,
    pub edited: E,
}

impl<E> EditCommand<E> {
    pub fn new(target: E, edited: E) -> Self {
        Self { target, edited }
    }
}

impl<E: ModelEntity + SessionRules> Command for EditCommand<E> {
    fn mutates(&self) -> bool {
        true
    }

    fn execute(&self, model: &mut dyn Model, session: &mut Session) -> CommandResult {
        E::set_in(model, &self.target, self.edited.clone())?;
        E::after_edit(&self.target, &self.edited, session);
        model.commit();
        Ok(CommandOutcome::new(format!("Edited {}: {}", E::KIND, self.edited)))
    }
}
