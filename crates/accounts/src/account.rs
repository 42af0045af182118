use core::fmt;

use serde::{Deserialize, Serialize};

use tablebook_core::{DomainError, DomainResult, Entity, Name, ValueObject};

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 20;
const PASSWORD_MIN_LEN: usize = 6;
const PASSWORD_MAX_LEN: usize = 64;

/// Login identifier. Unique across accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        let len = raw.chars().count();
        if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
            return Err(DomainError::validation(format!(
                "username must be {USERNAME_MIN_LEN} to {USERNAME_MAX_LEN} characters"
            )));
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(DomainError::validation(
                "username may only contain letters, digits and underscores",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Username {}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Account secret. Never printed by `Debug` or `Display`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Password(String);

impl Password {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let len = raw.chars().count();
        if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
            return Err(DomainError::validation(format!(
                "password must be {PASSWORD_MIN_LEN} to {PASSWORD_MAX_LEN} characters"
            )));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("password cannot contain whitespace"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl ValueObject for Password {}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl TryFrom<String> for Password {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Password> for String {
    fn from(value: Password) -> Self {
        value.0
    }
}

/// A staff account.
///
/// Two accounts are the same account iff their usernames match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    username: Username,
    password: Password,
    name: Name,
}

impl Account {
    pub fn new(username: Username, password: Password, name: Name) -> Self {
        Self {
            username,
            password,
            name,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Same account with a different password.
    pub fn with_password(&self, password: Password) -> Self {
        Self {
            password,
            ..self.clone()
        }
    }

    /// Whether `username`/`password` identify this account.
    pub fn authenticates(&self, username: &Username, password: &str) -> bool {
        &self.username == username && self.password.matches(password)
    }
}

impl Entity for Account {
    const KIND: &'static str = "account";

    fn is_same(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.name)
    }
}
