//! Command implementations.
//!
//! Each command works on an [`App`] holding both stores and writes its
//! human-readable output to the supplied writer.

pub mod products;
pub mod session;
pub mod shop;

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};

use openclose_core::User;
use openclose_store::{
    FileKeyValueStore, InventoryStore, KeyValueStore, NotificationSink, SessionStore, SystemClock,
    TracingSink,
};

use crate::config::CliConfig;
use crate::error::CliError;

/// The two stores a command can act on.
#[derive(Debug)]
pub struct App {
    pub session: SessionStore,
    pub inventory: InventoryStore,
}

impl App {
    /// Open both stores over the configured data file.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Storage` if the data file cannot be read.
    pub fn open(config: &CliConfig) -> Result<Self, CliError> {
        let storage: Arc<dyn KeyValueStore> =
            Arc::new(FileKeyValueStore::open(&config.data_file)?);
        let notifications: Arc<dyn NotificationSink> = Arc::new(TracingSink);

        let session = SessionStore::open(
            Arc::clone(&storage),
            Arc::clone(&notifications),
            config.credentials.clone(),
            config.login_delay,
        );
        let inventory = InventoryStore::open(storage, notifications, Arc::new(SystemClock));

        Ok(Self { session, inventory })
    }

    /// The logged-in admin, required by every inventory write.
    ///
    /// # Errors
    ///
    /// Returns `CliError::NotAuthenticated` when no admin session exists.
    pub fn require_admin(&self) -> Result<&User, CliError> {
        self.session
            .current_user()
            .filter(|user| user.is_admin)
            .ok_or(CliError::NotAuthenticated)
    }
}

/// Render a timestamp in the local timezone.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    use openclose_store::{Credentials, InMemoryKeyValueStore, LoginDelay, RecordingSink};

    /// An app over in-memory storage with no login delay.
    pub fn app() -> (App, InMemoryKeyValueStore, RecordingSink) {
        let storage = InMemoryKeyValueStore::new();
        let sink = RecordingSink::new();
        let session = SessionStore::open(
            Arc::new(storage.clone()),
            Arc::new(sink.clone()),
            Credentials::default(),
            LoginDelay::none(),
        );
        let inventory = InventoryStore::open(
            Arc::new(storage.clone()),
            Arc::new(sink.clone()),
            Arc::new(SystemClock),
        );
        (App { session, inventory }, storage, sink)
    }

    /// Same as [`app`], already logged in as admin.
    pub async fn admin_app() -> (App, InMemoryKeyValueStore, RecordingSink) {
        let (mut app, storage, sink) = app();
        let _ = app.session.login("admin", "admin123").await;
        let _ = sink.take();
        (app, storage, sink)
    }

    pub fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap_or_default()
    }
}
