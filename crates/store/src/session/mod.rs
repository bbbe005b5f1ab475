//! Session store.
//!
//! Owns the single authenticated identity for the process. There is at most
//! one session at a time; logging in again simply replaces it.
//!
//! # Lifecycle
//!
//! 1. [`SessionStore::open`] restores any persisted `user` record
//! 2. [`SessionStore::login`] checks the fixed credential pair and persists the user
//! 3. [`SessionStore::logout`] clears the user and removes the record

mod credentials;
mod error;

pub use credentials::{Credentials, LoginDelay};
pub use error::SessionError;

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use openclose_core::User;

use crate::notify::{Notification, NotificationSink};
use crate::observer::{Subscribers, SubscriptionId};
use crate::persistence::{KeyValueStore, decode_user, encode_user, keys};

/// The session state observed by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True exactly when a user is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Owner of the current session.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    notifications: Arc<dyn NotificationSink>,
    credentials: Credentials,
    delay: LoginDelay,
    session: Session,
    subscribers: Subscribers<Session>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("credentials", &self.credentials)
            .field("delay", &self.delay)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create an unauthenticated store without reading persisted state.
    #[must_use]
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        notifications: Arc<dyn NotificationSink>,
        credentials: Credentials,
        delay: LoginDelay,
    ) -> Self {
        Self {
            storage,
            notifications,
            credentials,
            delay,
            session: Session::default(),
            subscribers: Subscribers::new(),
        }
    }

    /// Create a store and restore any persisted session.
    #[must_use]
    pub fn open(
        storage: Arc<dyn KeyValueStore>,
        notifications: Arc<dyn NotificationSink>,
        credentials: Credentials,
        delay: LoginDelay,
    ) -> Self {
        let mut store = Self::new(storage, notifications, credentials, delay);
        store.restore();
        store
    }

    /// Reload the session from storage.
    ///
    /// A missing, unreadable, or malformed record leaves the store
    /// unauthenticated. Nothing is reported to the user.
    pub fn restore(&mut self) {
        let user = match self.storage.get(keys::USER) {
            Ok(Some(raw)) => match decode_user(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed session record");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read session record");
                None
            }
        };

        debug!(authenticated = user.is_some(), "Session restored");
        self.session = Session { user };
        self.subscribers.publish(&self.session);
    }

    /// Attempt to log in with a username and password.
    ///
    /// Waits for the configured [`LoginDelay`] first. Returns `Ok(true)` and
    /// persists the admin identity when the pair matches; returns `Ok(false)`
    /// and leaves the session untouched otherwise. There is no lockout.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Persistence` if the session record cannot be
    /// saved. The store stays in its previous state.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, username: &str, password: &str) -> Result<bool, SessionError> {
        self.delay.wait().await;

        if !self.credentials.matches(username, password) {
            info!("Login rejected");
            self.notifications
                .notify(Notification::error("Invalid credentials"));
            return Ok(false);
        }

        let user = self.credentials.admin_user();
        let raw = encode_user(&user)?;
        if let Err(e) = self.storage.set(keys::USER, &raw) {
            error!(error = %e, "Failed to persist session");
            return Err(e.into());
        }

        info!(user_id = %user.id, "Logged in");
        self.session = Session { user: Some(user) };
        self.notifications
            .notify(Notification::success("Logged in successfully"));
        self.subscribers.publish(&self.session);
        Ok(true)
    }

    /// End the current session.
    ///
    /// Does nothing when no one is logged in.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Persistence` if the session record cannot be
    /// removed. The user stays logged in.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<(), SessionError> {
        if !self.session.is_authenticated() {
            debug!("Logout requested with no active session");
            return Ok(());
        }

        self.storage.remove(keys::USER)?;
        self.session = Session::default();

        info!("Logged out");
        self.notifications.notify(Notification::info("Logged out"));
        self.subscribers.publish(&self.session);
        Ok(())
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.session.user()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Register a listener called with the session after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
