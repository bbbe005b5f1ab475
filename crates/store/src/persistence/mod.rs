//! Key-value persistence for durable store state.
//!
//! The stores only ever consume the `get`/`set`/`remove` contract of
//! [`KeyValueStore`]. Two implementations are provided:
//!
//! - [`InMemoryKeyValueStore`] - `HashMap`-backed, for tests and embedding
//! - [`FileKeyValueStore`] - a single JSON file on local disk
//!
//! # Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `user` | JSON session record `{"id","username","isAdmin"}` |
//! | `products` | JSON array of products |
//! | `shopStatus` | plain text `open` or `closed` |

mod file;
mod memory;

use thiserror::Error;

use openclose_core::{Product, User};

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

/// Storage keys used by the stores.
pub mod keys {
    /// Key for the persisted session user record.
    pub const USER: &str = "user";

    /// Key for the persisted product collection.
    pub const PRODUCTS: &str = "products";

    /// Key for the persisted shop status.
    pub const SHOP_STATUS: &str = "shopStatus";
}

/// Errors that can occur while reading or writing persisted values.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The backing store cannot be used (lock poisoned, quota, etc.).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A simple string key-value store.
///
/// Implementations must be synchronous: a `set` or `remove` that returns
/// `Ok` has been applied, and a following `get` observes it.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the write does not complete.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the write does not complete.
    fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}

// =============================================================================
// Codec
// =============================================================================

/// Encode a product collection for storage.
///
/// # Errors
///
/// Returns `PersistenceError::Serde` if encoding fails.
pub fn encode_products(products: &[Product]) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(products)?)
}

/// Decode a stored product collection.
///
/// # Errors
///
/// Returns `PersistenceError::Serde` if the text is not a valid product array.
pub fn decode_products(raw: &str) -> Result<Vec<Product>, PersistenceError> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode a session user record for storage.
///
/// # Errors
///
/// Returns `PersistenceError::Serde` if encoding fails.
pub fn encode_user(user: &User) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(user)?)
}

/// Decode a stored session user record.
///
/// # Errors
///
/// Returns `PersistenceError::Serde` if the text is not a valid user record.
pub fn decode_user(raw: &str) -> Result<User, PersistenceError> {
    Ok(serde_json::from_str(raw)?)
}
