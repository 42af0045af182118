use tablebook_store::{Book, Model};

use crate::command::{Command, CommandOutcome, CommandResult};
use crate::session::Session;

/// Feedback for a history move, logging the session out when the move
/// removed the current user's account (e.g. undoing its rename).
fn after_history_move(model: &dyn Model, session: &mut Session, feedback: &str) -> CommandOutcome {
    match session.logout_if_missing(model.account_list()) {
        Some(user) => CommandOutcome::new(format!("{feedback}\nAccount {user} no longer exists; logged out")),
        None => CommandOutcome::new(feedback),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UndoCommand;

impl Command for UndoCommand {
    fn mutates(&self) -> bool {
        true
    }

    fn execute(&self, model: &mut dyn Model, session: &mut Session) -> CommandResult {
        model.undo()?;
        Ok(after_history_move(model, session, "Undo success!"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RedoCommand;

impl Command for RedoCommand {
    fn mutates(&self) -> bool {
        true
    }

    fn execute(&self, model: &mut dyn Model, session: &mut Session) -> CommandResult {
        model.redo()?;
        Ok(after_history_move(model, session, "Redo success!"))
    }
}

/// Empties every collection except accounts.
///
/// Accounts survive so the logged-in user keeps a valid session. With
/// `forget_history` the cleared book also becomes the only history state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearCommand {
    pub forget_history: bool,
}

impl Command for ClearCommand {
    fn mutates(&self) -> bool {
        true
    }

    fn execute(&self, model: &mut dyn Model, session: &mut Session) -> CommandResult {
        let mut cleared = Book::new();
        cleared.set_accounts(model.account_list().to_vec())?;

        model.reset_data(&cleared)?;
        model.commit();
        if self.forget_history {
            model.reset_history();
        }
        Ok(after_history_move(model, session, "Data has been cleared!"))
    }
}
