//! Session store error types.

use thiserror::Error;

use crate::persistence::PersistenceError;

/// Errors that can occur during session operations.
///
/// Rejected credentials are not an error; `login` reports them as `Ok(false)`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session record could not be written or removed.
    #[error("session storage error: {0}")]
    Persistence(#[from] PersistenceError),
}
