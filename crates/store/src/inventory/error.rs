//! Inventory store error types.

use thiserror::Error;

use openclose_core::{ProductError, ProductId};

use crate::persistence::PersistenceError;

/// Errors that can occur during inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Product data failed validation.
    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ProductError),

    /// No product with this id exists.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// The new state could not be saved. In-memory state is unchanged.
    #[error("inventory storage error: {0}")]
    Persistence(#[from] PersistenceError),
}
