use core::fmt;

use tablebook_store::Model;

use crate::error::CommandError;
use crate::session::Session;

/// What a successful command reports back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub feedback: String,
}

impl CommandOutcome {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback)
    }
}

pub type CommandResult = Result<CommandOutcome, CommandError>;

/// One user action.
///
/// A command that changes the dataset commits exactly once, after all of its
/// mutations succeeded. On error it leaves the dataset as it found it and
/// does not commit.
pub trait Command: fmt::Debug {
    /// Whether [`App`](crate::App) refuses this command without a logged-in user.
    fn requires_login(&self) -> bool {
        true
    }

    /// Whether this command can change the dataset (including undo/redo).
    fn mutates(&self) -> bool;

    fn execute(&self, model: &mut dyn Model, session: &mut Session) -> CommandResult;
}
