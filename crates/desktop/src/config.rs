use core::fmt;
use std::env::VarError;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use tablebook_accounts::{Account, Password, Username};
use tablebook_core::Name;
use tablebook_observability::LogConfig;

/// Startup settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
    pub root_username: String,
    pub root_password: String,
}

impl AppConfig {
    pub const ROOT_USER_VAR: &'static str = "TABLEBOOK_ROOT_USER";
    pub const ROOT_PASSWORD_VAR: &'static str = "TABLEBOOK_ROOT_PASSWORD";

    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self {
            log: LogConfig::from_env(),
            ..Self::default()
        };
        if let Some(user) = env_var(Self::ROOT_USER_VAR)? {
            config.root_username = user;
        }
        if let Some(password) = env_var(Self::ROOT_PASSWORD_VAR)? {
            config.root_password = password;
        }
        Ok(config)
    }

    /// The account every fresh dataset starts with.
    pub fn root_account(&self) -> anyhow::Result<Account> {
        let username = Username::parse(&self.root_username)
            .with_context(|| format!("invalid root username '{}'", self.root_username))?;
        let password = Password::parse(&self.root_password).context("invalid root password")?;
        let name = Name::parse("Root").context("invalid root display name")?;
        Ok(Account::new(username, password, name))
    }
}

fn env_var(key: &str) -> anyhow::Result<Option<String>> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {key}")),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            root_username: "root".to_string(),
            root_password: "1122qq".to_string(),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("log", &self.log)
            .field("root_username", &self.root_username)
            .field("root_password", &"****")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_account_is_valid() {
        let account = AppConfig::default().root_account().unwrap();
        assert_eq!(account.username().as_str(), "root");
        assert!(account.password().matches("1122qq"));
    }

    #[test]
    fn invalid_root_password_is_reported() {
        let config = AppConfig {
            root_password: "short".to_string(),
            ..AppConfig::default()
        };
        let err = config.root_account().unwrap_err();
        assert!(format!("{err:#}").contains("invalid root password"));
    }

    #[test]
    fn deserializes_without_log_section() {
        let config: AppConfig =
            serde_json::from_str(r#"{"root_username":"owner","root_password":"abcdef"}"#).unwrap();
        assert_eq!(config.log, LogConfig::default());
        assert_eq!(config.root_account().unwrap().username().as_str(), "owner");
    }

    #[test]
    fn debug_hides_password() {
        assert!(!format!("{:?}", AppConfig::default()).contains("1122qq"));
    }
}
