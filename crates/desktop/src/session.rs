use tablebook_accounts::{Account, Username};
use uuid::Uuid;

/// The single user session of a running app.
///
/// Owned by [`App`](crate::App) and handed to each command; there is no global
/// "current user".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: Uuid,
    user: Option<Username>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            user: None,
        }
    }

    /// Correlates log lines of one run.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user(&self) -> Option<&Username> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_current(&self, username: &Username) -> bool {
        self.user.as_ref() == Some(username)
    }

    pub fn login(&mut self, username: Username) {
        self.user = Some(username);
    }

    pub fn logout(&mut self) -> Option<Username> {
        self.user.take()
    }

    /// Log out if the current user has no account in `accounts`.
    ///
    /// Returns the username that was logged out.
    pub fn logout_if_missing(&mut self, accounts: &[Account]) -> Option<Username> {
        let user = self.user.as_ref()?;
        if accounts.iter().any(|a| a.username() == user) {
            return None;
        }
        tracing::info!(user = %user, session = %self.id, "account gone, logging out");
        self.user.take()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
