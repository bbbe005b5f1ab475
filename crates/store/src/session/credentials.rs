//! The single admin credential pair and the simulated login round trip.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use openclose_core::{User, UserId};

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";
const ADMIN_USER_ID: &str = "1";

/// The username/password pair accepted by the session store.
///
/// This is a placeholder login, not a security mechanism: the pair is
/// compared in plaintext. Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, SecretString::from(DEFAULT_PASSWORD))
    }
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact, case-sensitive comparison of both fields.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password.expose_secret()
    }

    /// The identity granted by a successful login.
    #[must_use]
    pub fn admin_user(&self) -> User {
        User {
            id: UserId::new(ADMIN_USER_ID),
            username: self.username.clone(),
            is_admin: true,
        }
    }
}

/// Artificial pause before credentials are checked, standing in for a
/// network round trip.
///
/// Use [`LoginDelay::none`] in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginDelay(Duration);

impl Default for LoginDelay {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl LoginDelay {
    pub const DEFAULT: Duration = Duration::from_millis(500);

    #[must_use]
    pub const fn fixed(duration: Duration) -> Self {
        Self(duration)
    }

    #[must_use]
    pub const fn none() -> Self {
        Self(Duration::ZERO)
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.0
    }

    /// Suspend the caller for the configured duration.
    pub async fn wait(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_matches_exactly() {
        let creds = Credentials::default();
        assert!(creds.matches("admin", "admin123"));
        assert!(!creds.matches("Admin", "admin123"));
        assert!(!creds.matches("admin", "ADMIN123"));
        assert!(!creds.matches("admin", "wrong"));
        assert!(!creds.matches("", ""));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", Credentials::default());
        assert!(debug.contains("admin"));
        assert!(!debug.contains("admin123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_admin_user_identity() {
        let user = Credentials::new("owner", SecretString::from("pw")).admin_user();
        assert_eq!(user.id.as_str(), "1");
        assert_eq!(user.username, "owner");
        assert!(user.is_admin);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_elapses() {
        let start = tokio::time::Instant::now();
        LoginDelay::default().wait().await;
        assert!(start.elapsed() >= LoginDelay::DEFAULT);
    }

    #[tokio::test]
    async fn test_none_returns_immediately() {
        assert_eq!(LoginDelay::none().duration(), Duration::ZERO);
        LoginDelay::none().wait().await;
    }
}
