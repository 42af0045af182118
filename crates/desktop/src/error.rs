use tablebook_core::{DomainError, Name};
use thiserror::Error;

/// Why a command did not run.
///
/// Dataset rule violations surface unchanged as [`CommandError::Domain`];
/// the other variants belong to the session and to multi-step commands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("you must log in first")]
    NotLoggedIn,

    #[error("already logged in; log out first")]
    AlreadyLoggedIn,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("{0} is not on the menu")]
    ItemNotOnMenu(Name),

    #[error("cannot delete the account that is currently logged in")]
    CannotRemoveCurrentAccount,
}
