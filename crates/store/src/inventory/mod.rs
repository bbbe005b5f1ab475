//! Inventory store.
//!
//! Owns the product catalog and the shop's open/closed status. Every read
//! and write of the persisted `products` and `shopStatus` keys goes through
//! this store.
//!
//! Mutations are staged on a copy of the current [`InventorySnapshot`],
//! written to storage, and only then committed in memory. A failed write
//! therefore leaves both memory and storage as they were.

mod error;
mod seed;

pub use error::InventoryError;
pub use seed::seed_products;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use openclose_core::{NewProduct, Product, ProductId, ShopStatus};

use crate::clock::Clock;
use crate::notify::{Notification, NotificationSink};
use crate::observer::{Subscribers, SubscriptionId};
use crate::persistence::{KeyValueStore, decode_products, encode_products, keys};

/// Everything the inventory store holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySnapshot {
    /// Products in insertion order.
    pub products: Vec<Product>,
    pub status: ShopStatus,
    /// Time of the last mutation or refresh.
    pub last_updated: DateTime<Utc>,
}

/// Owner of the product catalog and shop status.
pub struct InventoryStore {
    storage: Arc<dyn KeyValueStore>,
    notifications: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
    state: InventorySnapshot,
    subscribers: Subscribers<InventorySnapshot>,
}

impl std::fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

fn has_unique_ids(products: &[Product]) -> bool {
    let mut seen = HashSet::with_capacity(products.len());
    products.iter().all(|p| seen.insert(&p.id))
}

impl InventoryStore {
    /// Create a store and load its state from storage.
    #[must_use]
    pub fn open(
        storage: Arc<dyn KeyValueStore>,
        notifications: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let last_updated = clock.now();
        let mut store = Self {
            storage,
            notifications,
            clock,
            state: InventorySnapshot {
                products: Vec::new(),
                status: ShopStatus::default(),
                last_updated,
            },
            subscribers: Subscribers::new(),
        };
        store.initialize();
        store
    }

    /// Load products and status from storage.
    ///
    /// Products fall back to [`seed_products`] and status to `closed`,
    /// independently, when missing or unreadable. This is the only place
    /// seed data enters the store.
    pub fn initialize(&mut self) {
        let products = self.load_products();
        let status = self.load_status();

        info!(
            products = products.len(),
            status = %status,
            "Inventory initialized"
        );
        self.state = InventorySnapshot {
            products,
            status,
            last_updated: self.clock.now(),
        };
        self.subscribers.publish(&self.state);
    }

    fn load_products(&self) -> Vec<Product> {
        let raw = match self.storage.get(keys::PRODUCTS) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored products; using seed data");
                return seed_products();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored products; using seed data");
                return seed_products();
            }
        };

        match decode_products(&raw) {
            Ok(products) if has_unique_ids(&products) => products,
            Ok(_) => {
                warn!("Stored products contain duplicate ids; using seed data");
                seed_products()
            }
            Err(e) => {
                warn!(error = %e, "Malformed stored products; using seed data");
                seed_products()
            }
        }
    }

    fn load_status(&self) -> ShopStatus {
        match self.storage.get(keys::SHOP_STATUS) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "Malformed stored status; defaulting to closed");
                ShopStatus::default()
            }),
            Ok(None) => ShopStatus::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read stored status; defaulting to closed");
                ShopStatus::default()
            }
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Flip the shop between open and closed.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Persistence` if the new status cannot be saved.
    #[instrument(skip(self), fields(from = %self.state.status))]
    pub fn toggle_status(&mut self) -> Result<ShopStatus, InventoryError> {
        let mut next = self.state.clone();
        next.status = next.status.toggled();
        next.last_updated = self.clock.now();
        self.commit(next)?;

        let status = self.state.status;
        info!(to = %status, "Shop status changed");
        self.notifications
            .notify(Notification::success(format!("Shop is now {status}")));
        Ok(status)
    }

    /// Append a new product with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidProduct` for a blank name or negative
    /// price, or `InventoryError::Persistence` if the catalog cannot be saved.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub fn add_product(&mut self, product: NewProduct) -> Result<Product, InventoryError> {
        product.validate()?;

        let product = product.into_product(self.fresh_id());
        let mut next = self.state.clone();
        next.products.push(product.clone());
        next.last_updated = self.clock.now();
        self.commit(next)?;

        info!(id = %product.id, "Product added");
        self.notifications.notify(Notification::success(format!(
            "Added {} to inventory",
            product.name
        )));
        Ok(product)
    }

    /// Replace the product with the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::ProductNotFound` if no product has this id
    /// (nothing is changed or saved), `InventoryError::InvalidProduct` for
    /// invalid data, or `InventoryError::Persistence` if the catalog cannot
    /// be saved.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub fn update_product(&mut self, product: Product) -> Result<(), InventoryError> {
        product.validate()?;

        let mut next = self.state.clone();
        let Some(slot) = next.products.iter_mut().find(|p| p.id == product.id) else {
            debug!("Update for unknown product");
            return Err(InventoryError::ProductNotFound(product.id));
        };
        slot.clone_from(&product);
        next.last_updated = self.clock.now();
        self.commit(next)?;

        info!("Product updated");
        self.notifications
            .notify(Notification::success(format!("Updated {}", product.name)));
        Ok(())
    }

    /// Remove the product with this id.
    ///
    /// Returns the removed product, or `None` if there was no such product,
    /// in which case nothing is changed, saved, or reported.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Persistence` if the catalog cannot be saved.
    #[instrument(skip(self))]
    pub fn delete_product(&mut self, id: &ProductId) -> Result<Option<Product>, InventoryError> {
        let Some(position) = self.state.products.iter().position(|p| &p.id == id) else {
            debug!("Delete for unknown product");
            return Ok(None);
        };

        let mut next = self.state.clone();
        let removed = next.products.remove(position);
        next.last_updated = self.clock.now();
        self.commit(next)?;

        info!("Product removed");
        self.notifications.notify(Notification::success(format!(
            "Removed {} from inventory",
            removed.name
        )));
        Ok(Some(removed))
    }

    /// Stamp `last_updated` with the current time.
    ///
    /// There is no backend to re-fetch from, so no data changes.
    pub fn refresh_data(&mut self) {
        self.state.last_updated = self.clock.now();
        debug!(last_updated = %self.state.last_updated, "Inventory refreshed");
        self.notifications.notify(Notification::info("Data refreshed"));
        self.subscribers.publish(&self.state);
    }

    fn fresh_id(&self) -> ProductId {
        loop {
            let id = ProductId::generate();
            if self.product(&id).is_none() {
                return id;
            }
        }
    }

    fn commit(&mut self, next: InventorySnapshot) -> Result<(), InventoryError> {
        let products = encode_products(&next.products)?;

        // Whichever field changed is written last.
        if next.status == self.state.status {
            self.storage.set(keys::SHOP_STATUS, next.status.as_str())?;
            self.storage.set(keys::PRODUCTS, &products)?;
        } else {
            self.storage.set(keys::PRODUCTS, &products)?;
            self.storage.set(keys::SHOP_STATUS, next.status.as_str())?;
        }

        self.state = next;
        self.subscribers.publish(&self.state);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Products whose name or description contains `query`, ignoring case.
    ///
    /// An empty or whitespace-only query returns every product. Results keep
    /// catalog order.
    #[must_use]
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        if query.trim().is_empty() {
            return self.state.products.clone();
        }

        let query = query.to_lowercase();
        self.state
            .products
            .iter()
            .filter(|p| p.matches_lowercase(&query))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.state.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub const fn status(&self) -> ShopStatus {
        self.state.status
    }

    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.state.last_updated
    }

    #[must_use]
    pub const fn snapshot(&self) -> &InventorySnapshot {
        &self.state
    }

    /// Register a listener called with the snapshot after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&InventorySnapshot) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
