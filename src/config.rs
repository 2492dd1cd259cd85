//! Runtime configuration for the SurveyMars client.
//!
//! Credentials are read once at startup and never change afterwards:
//! - `ACCOUNT_ID` - SurveyMars account id (required)
//! - `SECRET_KEY` - account secret key (required)
//! - `SURVEYMARS_BASE_URL` - API host (default: `https://api.surveymars.com`)

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.surveymars.com";

pub const ACCOUNT_ID_VAR: &str = "ACCOUNT_ID";
pub const SECRET_KEY_VAR: &str = "SECRET_KEY";
pub const BASE_URL_VAR: &str = "SURVEYMARS_BASE_URL";

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required {0} environment variable")]
    MissingVar(&'static str),
}

/// Account credentials and the API host they belong to.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_id: String,
    pub secret_key: String,
    pub base_url: String,
}

impl Credentials {
    pub fn new(
        account_id: impl Into<String>,
        secret_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            secret_key: secret_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Load credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let account_id =
            non_empty(ACCOUNT_ID_VAR).ok_or(ConfigError::MissingVar(ACCOUNT_ID_VAR))?;
        let secret_key =
            non_empty(SECRET_KEY_VAR).ok_or(ConfigError::MissingVar(SECRET_KEY_VAR))?;
        let base_url = non_empty(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(account_id, secret_key, base_url))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// How long to wait for a generation job to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Number of callback requests before giving up.
    pub max_attempts: u32,
    /// Fixed pause between two attempts.
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 50,
            interval: Duration::from_secs(2),
        }
    }
}
