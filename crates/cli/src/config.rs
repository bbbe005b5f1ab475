//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `OPENCLOSE_DATA_FILE` - Path of the local data file (default: openclose-data.json)
//! - `OPENCLOSE_LOGIN_DELAY_MS` - Simulated login round trip in ms (default: 500)
//! - `OPENCLOSE_ADMIN_USERNAME` - Admin username (default: admin)
//! - `OPENCLOSE_ADMIN_PASSWORD` - Admin password (default: admin123)
//! - `OPENCLOSE_LOG_JSON` - Emit JSON logs when set to anything but `0`/`false`

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use openclose_store::{Credentials, LoginDelay};

const DEFAULT_DATA_FILE: &str = "openclose-data.json";
const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
///
/// `Debug` is derived; the password inside `credentials` is redacted by
/// `Credentials` itself.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where the key-value data file lives
    pub data_file: PathBuf,
    /// Pause before credentials are checked
    pub login_delay: LoginDelay,
    /// The accepted admin credential pair
    pub credentials: Credentials,
    /// Emit JSON logs instead of text
    pub log_json: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_file = lookup("OPENCLOSE_DATA_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from);

        let login_delay = match lookup("OPENCLOSE_LOGIN_DELAY_MS") {
            Some(raw) => parse_delay(&raw)?,
            None => LoginDelay::default(),
        };

        let username =
            lookup("OPENCLOSE_ADMIN_USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        if username.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "OPENCLOSE_ADMIN_USERNAME".to_string(),
                "must not be empty".to_string(),
            ));
        }
        let password =
            lookup("OPENCLOSE_ADMIN_PASSWORD").unwrap_or_else(|| DEFAULT_PASSWORD.to_string());

        let log_json = lookup("OPENCLOSE_LOG_JSON").is_some_and(|v| is_truthy(&v));

        Ok(Self {
            data_file,
            login_delay,
            credentials: Credentials::new(username, SecretString::from(password)),
            log_json,
        })
    }
}

fn parse_delay(raw: &str) -> Result<LoginDelay, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(|ms| LoginDelay::fixed(Duration::from_millis(ms)))
        .map_err(|e| ConfigError::InvalidEnvVar("OPENCLOSE_LOGIN_DELAY_MS".to_string(), e.to_string()))
}

fn is_truthy(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "no")
}
