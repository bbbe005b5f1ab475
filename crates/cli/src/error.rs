//! Unified error handling for the CLI.

use thiserror::Error;

use openclose_store::{InventoryError, PersistenceError, SessionError};

use crate::config::ConfigError;

/// Top-level error for a CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The data file could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] PersistenceError),

    /// Session operation failed.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Inventory operation failed.
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// An admin-only command was run without a session.
    #[error("Admin login required (run `oc-cli login` first)")]
    NotAuthenticated,

    /// Login was attempted with the wrong username or password.
    #[error("Invalid credentials")]
    InvalidCredentials,
}
