use anyhow::Context;

use tablebook_events::Subscription;
use tablebook_store::{Book, BookChanged, Model, ModelManager};

use crate::command::{Command, CommandResult};
use crate::config::AppConfig;
use crate::error::CommandError;
use crate::session::Session;

/// A running tablebook: the dataset, its history and the user session.
#[derive(Debug)]
pub struct App {
    model: ModelManager,
    session: Session,
}

impl App {
    /// Start from an empty dataset holding only the configured root account.
    ///
    /// The seed is not undoable.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let root = config.root_account()?;

        let mut model = ModelManager::new(Book::new());
        model.add_account(root).context("failed to seed root account")?;
        model.reset_history();

        let session = Session::new();
        tracing::info!(session = %session.id(), root = %config.root_username, "app started");
        Ok(Self { model, session })
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Changes published after every successful dataset change.
    pub fn subscribe(&self) -> Subscription<BookChanged> {
        self.model.subscribe()
    }

    /// Run `command` unless it needs a login the session does not have.
    pub fn execute(&mut self, command: &dyn Command) -> CommandResult {
        let span = tracing::info_span!("command", session = %self.session.id(), command = ?command);
        let _guard = span.enter();

        if command.requires_login() && !self.session.is_logged_in() {
            tracing::info!("rejected: not logged in");
            return Err(CommandError::NotLoggedIn);
        }

        let result = command.execute(&mut self.model, &mut self.session);
        match &result {
            Ok(outcome) if command.mutates() => tracing::info!(
                feedback = %outcome,
                cursor = self.model.cursor(),
                history_len = self.model.history_len(),
                "command succeeded"
            ),
            Ok(outcome) => tracing::info!(feedback = %outcome, "command succeeded"),
            Err(e) => tracing::info!(error = %e, "command failed"),
        }
        result
    }
}
